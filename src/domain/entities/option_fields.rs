use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::ValidateLength;

/// Represents optional field semantics in PATCH/UPDATE requests.
///
/// - `Unchanged` → field absent from the payload
/// - `SetToNull` → explicitly `null`
/// - `SetToValue` → set to provided value
///
/// Use with `#[serde(default, skip_serializing_if = "OptionField::is_unchanged")]`
/// so an absent field stays absent when the patch is forwarded to the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

// ---------------------- Serde ----------------------

impl<T: Serialize> Serialize for OptionField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionField::SetToValue(value) => value.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

// ---------------------- Validation support ----------------------

impl<T> ValidateLength<u64> for OptionField<T>
where
    T: ValidateLength<u64>
{
    fn length(&self) -> Option<u64> {
        match self {
            OptionField::SetToValue(value) => value.length(),
            _ => None,
        }
    }
    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            OptionField::SetToValue(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

// ---------------------- Core helpers ----------------------

impl<T> OptionField<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

pub type PatchString = OptionField<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Patch {
        #[serde(default, skip_serializing_if = "OptionField::is_unchanged")]
        phone: PatchString,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"phone": "+62 812"}"#).unwrap();

        assert_eq!(absent.phone, OptionField::Unchanged);
        assert_eq!(null.phone, OptionField::SetToNull);
        assert_eq!(value.phone, OptionField::SetToValue("+62 812".to_string()));
    }

    #[test]
    fn unchanged_fields_are_not_forwarded() {
        let json = serde_json::to_value(Patch { phone: OptionField::Unchanged }).unwrap();
        assert_eq!(json, serde_json::json!({}));

        let json = serde_json::to_value(Patch { phone: OptionField::SetToNull }).unwrap();
        assert_eq!(json, serde_json::json!({"phone": null}));
    }

    #[test]
    fn only_set_values_are_exposed() {
        assert_eq!(PatchString::SetToValue("x".into()).value_ref().map(String::as_str), Some("x"));
        assert_eq!(PatchString::SetToNull.value_ref(), None);
        assert!(PatchString::Unchanged.is_unchanged());
    }
}

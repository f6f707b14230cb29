//! Serde and validation helpers shared by the content entities.

use serde::{Deserialize, Deserializer};
use url::Url;
use validator::ValidationError;

use crate::entities::option_fields::OptionField;

#[derive(Deserialize)]
#[serde(untagged)]
enum ListInput {
    List(Vec<String>),
    Csv(String),
}

fn normalize(input: ListInput) -> Vec<String> {
    let items = match input {
        ListInput::List(items) => items,
        ListInput::Csv(raw) => raw.split(',').map(str::to_string).collect(),
    };
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Accepts a JSON list, a comma separated string or `null`.
pub fn list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ListInput>::deserialize(deserializer)?
        .map(normalize)
        .unwrap_or_default())
}

/// Same as [`list_or_csv`] for patch payloads, where `null` means "leave as is".
pub fn optional_list_or_csv<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ListInput>::deserialize(deserializer)?.map(normalize))
}

/// Store columns may hold `null` where the API exposes a plain string.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Empty, the `#` placeholder, or an absolute http(s) URL.
pub fn validate_link(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value == "#" {
        return Ok(());
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => {
            let mut err = ValidationError::new("invalid_link");
            err.message = Some("Must be an http(s) URL or '#'".into());
            Err(err)
        }
    }
}

pub fn validate_patch_link(value: &OptionField<String>) -> Result<(), ValidationError> {
    match value.value_ref() {
        Some(link) => validate_link(link),
        None => Ok(()),
    }
}

pub fn validate_items(items: &[String]) -> Result<(), ValidationError> {
    if items.iter().any(|item| item.chars().count() > 60) {
        let mut err = ValidationError::new("item_too_long");
        err.message = Some("List items must be at most 60 characters".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "list_or_csv")]
        items: Vec<String>,
    }

    #[test]
    fn comma_separated_input_is_split_and_trimmed() {
        let holder: Holder = serde_json::from_str(r#"{"items": "React, TypeScript ,, Tailwind"}"#).unwrap();
        assert_eq!(holder.items, vec!["React", "TypeScript", "Tailwind"]);
    }

    #[test]
    fn list_input_keeps_order() {
        let holder: Holder = serde_json::from_str(r#"{"items": ["Python", " Flask", "Docker"]}"#).unwrap();
        assert_eq!(holder.items, vec!["Python", "Flask", "Docker"]);
    }

    #[test]
    fn null_or_missing_is_empty() {
        let holder: Holder = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(holder.items.is_empty());
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.items.is_empty());
    }

    #[test]
    fn links_allow_placeholder() {
        assert!(validate_link("").is_ok());
        assert!(validate_link("#").is_ok());
        assert!(validate_link("https://github.com/someone/repo").is_ok());
        assert!(validate_link("javascript:alert(1)").is_err());
        assert!(validate_link("not a url").is_err());
    }
}

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::constants::SETTINGS_ROW_ID;
use crate::entities::{
    fields::{list_or_csv, optional_list_or_csv, validate_items, validate_patch_link},
    option_fields::{OptionField, PatchString},
};

// ───── Store row ─────────────────────────────────────────────────────

/// The singleton `site_settings` row (`id = 1`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    #[serde(default = "settings_row_id")]
    pub id: i64,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default)]
    pub site_title: Option<String>,
    #[serde(default)]
    pub about_description: Option<String>,
    #[serde(default, deserialize_with = "list_or_csv")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_address: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

fn settings_row_id() -> i64 {
    SETTINGS_ROW_ID
}

// ───── Input & Validation ───────────────────────────────────────────

/// In-place update of the settings row. Nullable fields distinguish
/// "absent" from an explicit `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 120, message = "Site title cannot be empty"))]
    pub site_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 4000))]
    pub about_description: Option<String>,

    #[serde(default, deserialize_with = "optional_list_or_csv", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_items"))]
    pub skills: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_contact_email"))]
    pub contact_email: Option<String>,

    #[serde(default, skip_serializing_if = "OptionField::is_unchanged")]
    #[validate(length(max = 40))]
    pub contact_phone: PatchString,

    #[serde(default, skip_serializing_if = "OptionField::is_unchanged")]
    #[validate(length(max = 240))]
    pub contact_address: PatchString,

    #[serde(default, skip_serializing_if = "OptionField::is_unchanged")]
    #[validate(custom(function = "validate_patch_link"))]
    pub hero_image_url: PatchString,

    #[serde(default, skip_serializing_if = "OptionField::is_unchanged")]
    #[validate(custom(function = "validate_patch_link"))]
    pub github_url: PatchString,

    #[serde(default, skip_serializing_if = "OptionField::is_unchanged")]
    #[validate(custom(function = "validate_patch_link"))]
    pub linkedin_url: PatchString,
}

fn validate_contact_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() || email.validate_email() {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_email");
        err.message = Some("Invalid email format".into());
        Err(err)
    }
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self == &SettingsPatch::default()
    }

    pub fn hero_image(url: String) -> Self {
        SettingsPatch {
            hero_image_url: OptionField::SetToValue(url),
            ..SettingsPatch::default()
        }
    }

    pub fn maintenance(enabled: bool) -> Self {
        SettingsPatch {
            maintenance_mode: Some(enabled),
            ..SettingsPatch::default()
        }
    }
}

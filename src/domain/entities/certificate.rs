use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::fields::{string_or_empty, validate_link};

const MAX_NAME_LENGTH: u64 = 160;
const MAX_ISSUER_LENGTH: u64 = 120;
const MAX_DATE_LENGTH: u64 = 40;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certificate {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub issuer: String,
    /// Free text as entered by the admin, e.g. `2024` or `March 2023`.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub credential_url: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct CertificateForm {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_ISSUER_LENGTH, message = "Issuer is required"))]
    pub issuer: String,

    #[serde(default)]
    #[validate(length(max = MAX_DATE_LENGTH))]
    pub date: String,

    #[serde(default)]
    #[validate(custom(function = "validate_link"))]
    pub credential_url: String,

    #[serde(default)]
    #[validate(custom(function = "validate_link"))]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct CertificatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_ISSUER_LENGTH, message = "Issuer cannot be empty"))]
    pub issuer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_DATE_LENGTH))]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_link"))]
    pub credential_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_link"))]
    pub image_url: Option<String>,
}

impl CertificatePatch {
    pub fn is_empty(&self) -> bool {
        self == &CertificatePatch::default()
    }
}

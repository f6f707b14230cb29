use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const PROJECTS_TABLE: &str = "projects";
pub const CERTIFICATES_TABLE: &str = "certificates";
pub const SETTINGS_TABLE: &str = "site_settings";
pub const MESSAGES_TABLE: &str = "messages";

/// Primary key of the only `site_settings` row.
pub const SETTINGS_ROW_ID: i64 = 1;

pub const IMAGE_BUCKET: &str = "portfolio-images";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PATH: &str = "/admin";

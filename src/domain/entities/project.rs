use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::fields::{
    list_or_csv, optional_list_or_csv, string_or_empty, validate_items, validate_link,
};

const MAX_TITLE_LENGTH: u64 = 120;
const MAX_DESCRIPTION_LENGTH: u64 = 2000;
const MAX_CATEGORY_LENGTH: u64 = 40;

pub const DEFAULT_CATEGORY: &str = "Web App";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "list_or_csv")]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub demo_url: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub repo_url: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub image_url: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields for a new project; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ProjectForm {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH, message = "Description is required"))]
    pub description: String,

    #[serde(default, deserialize_with = "list_or_csv")]
    #[validate(
        length(min = 1, message = "At least one technology is required"),
        custom(function = "validate_items")
    )]
    pub tech_stack: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_link"))]
    pub demo_url: String,

    #[serde(default)]
    #[validate(custom(function = "validate_link"))]
    pub repo_url: String,

    #[serde(default)]
    #[validate(custom(function = "validate_link"))]
    pub image_url: String,

    #[serde(default = "default_category")]
    #[validate(length(min = 1, max = MAX_CATEGORY_LENGTH, message = "Category is required"))]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Partial update; absent fields are left untouched by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "optional_list_or_csv", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_items"))]
    pub tech_stack: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_link"))]
    pub demo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_link"))]
    pub repo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_link"))]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_CATEGORY_LENGTH, message = "Category cannot be empty"))]
    pub category: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self == &ProjectPatch::default()
    }
}

/// Distinct categories in first-seen order, prefixed with `All`.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut seen = vec!["All".to_string()];
    for project in projects {
        if !project.category.is_empty() && !seen.contains(&project.category) {
            seen.push(project.category.clone());
        }
    }
    seen
}

pub fn filter_by_category(projects: Vec<Project>, category: Option<&str>) -> Vec<Project> {
    match category {
        None | Some("") | Some("All") => projects,
        Some(wanted) => projects.into_iter().filter(|p| p.category == wanted).collect(),
    }
}

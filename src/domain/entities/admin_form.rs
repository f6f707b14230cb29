//! Tagged payloads for the admin create/update flows.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::{
    certificate::{Certificate, CertificateForm, CertificatePatch},
    project::{Project, ProjectForm, ProjectPatch},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Project,
    Certificate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityForm {
    Project(ProjectForm),
    Certificate(CertificateForm),
}

impl EntityForm {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityForm::Project(_) => EntityKind::Project,
            EntityForm::Certificate(_) => EntityKind::Certificate,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            EntityForm::Project(form) => form.validate(),
            EntityForm::Certificate(form) => form.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityPatch {
    Project(ProjectPatch),
    Certificate(CertificatePatch),
}

impl EntityPatch {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityPatch::Project(_) => EntityKind::Project,
            EntityPatch::Certificate(_) => EntityKind::Certificate,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            EntityPatch::Project(patch) => patch.is_empty(),
            EntityPatch::Certificate(patch) => patch.is_empty(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            EntityPatch::Project(patch) => patch.validate(),
            EntityPatch::Certificate(patch) => patch.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityRecord {
    Project(Project),
    Certificate(Certificate),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityList {
    Projects(Vec<Project>),
    Certificates(Vec<Certificate>),
}

/// Result of an admin mutation. `applied` is false in demo mode;
/// `items` is always a fresh read of the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationOutcome {
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<EntityRecord>,
    pub items: EntityList,
}

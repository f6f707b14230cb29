use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::{
        admin_form::{EntityForm, EntityKind, EntityList, EntityPatch, EntityRecord, MutationOutcome},
        certificate::Certificate,
        message::Message,
        project::{categories, Project},
        session::{AccessToken, SessionSummary},
        site_settings::{SettingsPatch, SiteSettings},
    },
    errors::{AppError, StoreError},
    use_cases::content::ContentService,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadTarget {
    #[default]
    Asset,
    Hero,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub session: SessionSummary,
    pub live: bool,
    pub projects: Vec<Project>,
    pub categories: Vec<String>,
    pub certificates: Vec<Certificate>,
    pub settings: Option<SiteSettings>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct SettingsOutcome {
    pub applied: bool,
    pub settings: Option<SiteSettings>,
}

#[derive(Debug, Serialize)]
pub struct DeleteOutcome<T> {
    pub applied: bool,
    pub items: T,
}

#[derive(Debug, Serialize)]
pub struct UploadOutcome {
    pub url: Option<String>,
    pub target: UploadTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<SiteSettings>,
    /// Set when the object was stored but the hero image could not be pointed at it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_error: Option<String>,
}

/// Dashboard mutations. Every response carries a fresh read of the
/// affected collection, never a locally patched copy.
#[derive(Clone)]
pub struct AdminHandler {
    content: ContentService,
}

impl AdminHandler {
    pub fn new(content: ContentService) -> Self {
        AdminHandler { content }
    }

    pub async fn dashboard(&self, token: &AccessToken, session: SessionSummary) -> Result<Dashboard, AppError> {
        let (projects, certificates, settings, messages) = futures::join!(
            self.content.load_projects(),
            self.content.load_certificates(),
            self.content.load_site_settings(),
            self.content.messages(token),
        );
        let projects = projects?;

        Ok(Dashboard {
            session,
            live: self.content.is_live(),
            categories: categories(&projects),
            projects,
            certificates: certificates?,
            settings: settings?,
            messages,
        })
    }

    pub async fn list(&self, kind: EntityKind) -> Result<EntityList, StoreError> {
        Ok(match kind {
            EntityKind::Project => EntityList::Projects(self.content.load_projects().await?),
            EntityKind::Certificate => EntityList::Certificates(self.content.load_certificates().await?),
        })
    }

    pub async fn create(&self, token: &AccessToken, form: EntityForm) -> Result<MutationOutcome, AppError> {
        form.validate()?;
        let kind = form.kind();

        let record = match &form {
            EntityForm::Project(form) => self
                .content
                .add_project(token, form)
                .await?
                .map(EntityRecord::Project),
            EntityForm::Certificate(form) => self
                .content
                .add_certificate(token, form)
                .await?
                .map(EntityRecord::Certificate),
        };
        self.outcome(kind, record).await
    }

    pub async fn update(&self, token: &AccessToken, id: i64, patch: EntityPatch) -> Result<MutationOutcome, AppError> {
        if patch.is_empty() {
            return Err(AppError::InvalidInput("No fields to update".to_string()));
        }
        patch.validate()?;
        let kind = patch.kind();

        let record = match &patch {
            EntityPatch::Project(patch) => self
                .content
                .update_project(token, id, patch)
                .await?
                .map(EntityRecord::Project),
            EntityPatch::Certificate(patch) => self
                .content
                .update_certificate(token, id, patch)
                .await?
                .map(EntityRecord::Certificate),
        };
        self.outcome(kind, record).await
    }

    pub async fn delete(&self, token: &AccessToken, kind: EntityKind, id: i64) -> Result<MutationOutcome, AppError> {
        let applied = match kind {
            EntityKind::Project => self.content.delete_project(token, id).await?,
            EntityKind::Certificate => self.content.delete_certificate(token, id).await?,
        }
        .is_some();

        Ok(MutationOutcome { applied, record: None, items: self.list(kind).await? })
    }

    pub async fn delete_message(&self, token: &AccessToken, id: i64) -> Result<DeleteOutcome<Vec<Message>>, AppError> {
        let applied = self.content.delete_message(token, id).await?.is_some();
        Ok(DeleteOutcome { applied, items: self.content.messages(token).await })
    }

    pub async fn messages(&self, token: &AccessToken) -> Vec<Message> {
        self.content.messages(token).await
    }

    pub async fn update_settings(&self, token: &AccessToken, patch: SettingsPatch) -> Result<SettingsOutcome, AppError> {
        if patch.is_empty() {
            return Err(AppError::InvalidInput("No fields to update".to_string()));
        }
        patch.validate()?;

        let applied = self.content.update_site_settings(token, &patch).await?.is_some();
        Ok(SettingsOutcome { applied, settings: self.content.load_site_settings().await? })
    }

    /// Uploads an image; a `Hero` upload also points the hero image at it.
    /// A failed settings patch after a stored upload still returns the URL.
    pub async fn upload_image(
        &self,
        token: &AccessToken,
        file_name: &str,
        bytes: Vec<u8>,
        target: UploadTarget,
    ) -> Result<UploadOutcome, AppError> {
        let url = self.content.upload_image(token, file_name, bytes).await?;

        let mut outcome = UploadOutcome { url, target, settings: None, settings_error: None };
        let Some(url) = outcome.url.clone().filter(|_| target == UploadTarget::Hero) else {
            return Ok(outcome);
        };

        let patched = self
            .content
            .update_site_settings(token, &SettingsPatch::hero_image(url.clone()))
            .await;
        match patched {
            Ok(_) => outcome.settings = self.content.site_settings().await,
            Err(e) => {
                tracing::error!(error = %e, url = %url, "Hero image stored but settings not updated");
                outcome.settings_error = Some(e.to_string());
            }
        }
        Ok(outcome)
    }

    async fn outcome(&self, kind: EntityKind, record: Option<EntityRecord>) -> Result<MutationOutcome, AppError> {
        Ok(MutationOutcome {
            applied: record.is_some(),
            record,
            items: self.list(kind).await?,
        })
    }
}

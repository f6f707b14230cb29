use async_trait::async_trait;

use crate::{
    entities::{
        certificate::{Certificate, CertificateForm, CertificatePatch},
        message::{Message, MessageForm},
        project::{Project, ProjectForm, ProjectPatch},
        session::AccessToken,
        site_settings::{SettingsPatch, SiteSettings},
    },
    errors::{StoreError, UploadError},
};

/// Outcome of a write. `Ok(None)` means the backend accepted the call
/// without persisting anything (demo mode).
pub type Mutation<T> = Result<Option<T>, StoreError>;

/// Table and bucket access for the four content entities.
///
/// Writes carry the admin's access token so row level security applies on
/// the store. Reads and `send_message` run with the anonymous key.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// False when running on built-in sample data.
    fn is_live(&self) -> bool;

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn add_project(&self, token: &AccessToken, form: &ProjectForm) -> Mutation<Project>;
    async fn update_project(&self, token: &AccessToken, id: i64, patch: &ProjectPatch) -> Mutation<Project>;
    async fn delete_project(&self, token: &AccessToken, id: i64) -> Mutation<()>;

    async fn list_certificates(&self) -> Result<Vec<Certificate>, StoreError>;
    async fn add_certificate(&self, token: &AccessToken, form: &CertificateForm) -> Mutation<Certificate>;
    async fn update_certificate(
        &self,
        token: &AccessToken,
        id: i64,
        patch: &CertificatePatch,
    ) -> Mutation<Certificate>;
    async fn delete_certificate(&self, token: &AccessToken, id: i64) -> Mutation<()>;

    async fn site_settings(&self) -> Result<Option<SiteSettings>, StoreError>;
    async fn update_site_settings(&self, token: &AccessToken, patch: &SettingsPatch) -> Mutation<SiteSettings>;

    async fn list_messages(&self, token: &AccessToken) -> Result<Vec<Message>, StoreError>;
    async fn send_message(&self, form: &MessageForm) -> Mutation<()>;
    async fn delete_message(&self, token: &AccessToken, id: i64) -> Mutation<()>;

    /// Stores `bytes` under `name` in the image bucket and returns its public URL.
    async fn upload_object(
        &self,
        token: &AccessToken,
        name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<Option<String>, UploadError>;
}

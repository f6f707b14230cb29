//! Backends used when no store credentials are configured.

use async_trait::async_trait;

use crate::{
    entities::{
        certificate::{Certificate, CertificateForm, CertificatePatch},
        message::{Message, MessageForm},
        project::{Project, ProjectForm, ProjectPatch},
        samples::{sample_certificates, sample_projects},
        session::{AccessToken, Session},
        site_settings::{SettingsPatch, SiteSettings},
    },
    errors::{AuthError, StoreError, UploadError},
    repositories::{
        auth_provider::AuthProvider,
        storage_backend::{Mutation, StorageBackend},
    },
};

/// Reads return sample content; writes are accepted and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoBackend;

#[async_trait]
impl StorageBackend for DemoBackend {
    fn is_live(&self) -> bool {
        false
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(sample_projects())
    }

    async fn add_project(&self, _: &AccessToken, _: &ProjectForm) -> Mutation<Project> {
        Ok(None)
    }

    async fn update_project(&self, _: &AccessToken, _: i64, _: &ProjectPatch) -> Mutation<Project> {
        Ok(None)
    }

    async fn delete_project(&self, _: &AccessToken, _: i64) -> Mutation<()> {
        Ok(None)
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, StoreError> {
        Ok(sample_certificates())
    }

    async fn add_certificate(&self, _: &AccessToken, _: &CertificateForm) -> Mutation<Certificate> {
        Ok(None)
    }

    async fn update_certificate(&self, _: &AccessToken, _: i64, _: &CertificatePatch) -> Mutation<Certificate> {
        Ok(None)
    }

    async fn delete_certificate(&self, _: &AccessToken, _: i64) -> Mutation<()> {
        Ok(None)
    }

    async fn site_settings(&self) -> Result<Option<SiteSettings>, StoreError> {
        Ok(None)
    }

    async fn update_site_settings(&self, _: &AccessToken, _: &SettingsPatch) -> Mutation<SiteSettings> {
        Ok(None)
    }

    async fn list_messages(&self, _: &AccessToken) -> Result<Vec<Message>, StoreError> {
        Ok(Vec::new())
    }

    async fn send_message(&self, _: &MessageForm) -> Mutation<()> {
        Ok(None)
    }

    async fn delete_message(&self, _: &AccessToken, _: i64) -> Mutation<()> {
        Ok(None)
    }

    async fn upload_object(&self, _: &AccessToken, _: &str, _: Vec<u8>, _: &str) -> Result<Option<String>, UploadError> {
        Ok(None)
    }
}

/// No sessions exist without a provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAuth;

#[async_trait]
impl AuthProvider for DemoAuth {
    async fn sign_in(&self, _: &str, _: &str) -> Result<Session, AuthError> {
        Err(AuthError::NotConfigured)
    }

    async fn sign_out(&self, _: &AccessToken) -> Result<(), AuthError> {
        Ok(())
    }

    async fn current_session(&self, _: &AccessToken) -> Result<Option<Session>, AuthError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn writes_are_silent_no_ops() {
        let backend = DemoBackend;
        let token = AccessToken::new("t");
        assert_eq!(backend.delete_project(&token, 1).await, Ok(None));
        assert_eq!(backend.upload_object(&token, "a.png", vec![1], "image/png").await, Ok(None));
        assert!(!backend.is_live());
    }

    #[actix_rt::test]
    async fn reads_serve_samples() {
        let backend = DemoBackend;
        assert_eq!(backend.list_projects().await.unwrap(), sample_projects());
        assert!(backend.list_messages(&AccessToken::new("t")).await.unwrap().is_empty());
        assert_eq!(backend.site_settings().await, Ok(None));
    }
}

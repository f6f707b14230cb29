use std::sync::Arc;

use crate::{
    entities::{
        certificate::{Certificate, CertificateForm, CertificatePatch},
        message::{Message, MessageForm},
        project::{Project, ProjectForm, ProjectPatch},
        samples::{sample_certificates, sample_projects},
        session::AccessToken,
        site_settings::{SettingsPatch, SiteSettings},
    },
    errors::{StoreError, UploadError},
    repositories::storage_backend::{Mutation, StorageBackend},
    utils::object_name::{is_image, object_name, sniff_content_type},
};

/// Data access for the public site and the dashboard.
///
/// Masked reads never fail: projects and certificates fall back to the
/// built-in samples, messages to an empty list and settings to `None`.
/// The `load_*` reads propagate store failures instead; messages have none.
#[derive(Clone)]
pub struct ContentService {
    backend: Arc<dyn StorageBackend>,
}

impl ContentService {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        ContentService { backend }
    }

    pub fn is_live(&self) -> bool {
        self.backend.is_live()
    }

    pub async fn projects(&self) -> Vec<Project> {
        self.backend.list_projects().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Project read failed, serving samples");
            sample_projects()
        })
    }

    pub async fn certificates(&self) -> Vec<Certificate> {
        self.backend.list_certificates().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Certificate read failed, serving samples");
            sample_certificates()
        })
    }

    pub async fn site_settings(&self) -> Option<SiteSettings> {
        self.backend.site_settings().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Settings read failed");
            None
        })
    }

    pub async fn messages(&self, token: &AccessToken) -> Vec<Message> {
        self.backend.list_messages(token).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Message read failed");
            Vec::new()
        })
    }

    pub async fn load_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.backend.list_projects().await
    }

    pub async fn load_certificates(&self) -> Result<Vec<Certificate>, StoreError> {
        self.backend.list_certificates().await
    }

    pub async fn load_site_settings(&self) -> Result<Option<SiteSettings>, StoreError> {
        self.backend.site_settings().await
    }

    pub async fn add_project(&self, token: &AccessToken, form: &ProjectForm) -> Mutation<Project> {
        logged("add project", self.backend.add_project(token, form).await)
    }

    pub async fn update_project(&self, token: &AccessToken, id: i64, patch: &ProjectPatch) -> Mutation<Project> {
        logged("update project", self.backend.update_project(token, id, patch).await)
    }

    pub async fn delete_project(&self, token: &AccessToken, id: i64) -> Mutation<()> {
        logged("delete project", self.backend.delete_project(token, id).await)
    }

    pub async fn add_certificate(&self, token: &AccessToken, form: &CertificateForm) -> Mutation<Certificate> {
        logged("add certificate", self.backend.add_certificate(token, form).await)
    }

    pub async fn update_certificate(
        &self,
        token: &AccessToken,
        id: i64,
        patch: &CertificatePatch,
    ) -> Mutation<Certificate> {
        logged("update certificate", self.backend.update_certificate(token, id, patch).await)
    }

    pub async fn delete_certificate(&self, token: &AccessToken, id: i64) -> Mutation<()> {
        logged("delete certificate", self.backend.delete_certificate(token, id).await)
    }

    pub async fn update_site_settings(&self, token: &AccessToken, patch: &SettingsPatch) -> Mutation<SiteSettings> {
        logged("update settings", self.backend.update_site_settings(token, patch).await)
    }

    pub async fn send_message(&self, form: &MessageForm) -> Mutation<()> {
        logged("send message", self.backend.send_message(form).await)
    }

    pub async fn delete_message(&self, token: &AccessToken, id: i64) -> Mutation<()> {
        logged("delete message", self.backend.delete_message(token, id).await)
    }

    /// Stores an image under a fresh random name and returns its public URL.
    /// In demo mode nothing is checked or stored and the result is `None`.
    pub async fn upload_image(
        &self,
        token: &AccessToken,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<String>, UploadError> {
        if !self.backend.is_live() {
            tracing::info!(file_name, "Demo mode, upload skipped");
            return Ok(None);
        }
        if bytes.is_empty() {
            return Err(UploadError::EmptyFile);
        }
        if !is_image(&bytes) {
            return Err(UploadError::NotAnImage);
        }
        let name = object_name(file_name);
        let content_type = sniff_content_type(&bytes);

        self.backend
            .upload_object(token, &name, bytes, content_type)
            .await
            .inspect_err(|e| tracing::error!(error = %e, object = %name, "Image upload failed"))
    }
}

fn logged<T>(operation: &str, result: Mutation<T>) -> Mutation<T> {
    match &result {
        Ok(Some(_)) => tracing::info!(operation, "Store mutation applied"),
        Ok(None) => tracing::info!(operation, "Demo mode, mutation skipped"),
        Err(e) => tracing::error!(operation, error = %e, "Store mutation failed"),
    }
    result
}

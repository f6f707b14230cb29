use async_trait::async_trait;
use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    constants::{CERTIFICATES_TABLE, MESSAGES_TABLE, PROJECTS_TABLE, SETTINGS_ROW_ID, SETTINGS_TABLE},
    entities::{
        certificate::{Certificate, CertificateForm, CertificatePatch},
        message::{Message, MessageForm},
        project::{Project, ProjectForm, ProjectPatch},
        session::AccessToken,
        site_settings::{SettingsPatch, SiteSettings},
    },
    errors::{StoreError, UploadError},
    infrastructure::supabase::client::{rejection_message, SupabaseClient},
    repositories::storage_backend::{Mutation, StorageBackend},
};

const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";
const RETURN_MINIMAL: &str = "return=minimal";

/// `StorageBackend` over the store's REST and storage APIs.
#[derive(Clone)]
pub struct RemoteBackend {
    pub(crate) client: SupabaseClient,
    pub(crate) bucket: String,
}

impl RemoteBackend {
    pub fn new(client: SupabaseClient, bucket: impl Into<String>) -> Self {
        RemoteBackend { client, bucket: bucket.into() }
    }

    fn table(name: &str) -> String {
        format!("rest/v1/{}", name)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        token: Option<&AccessToken>,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .client
            .request(Method::GET, &Self::table(table), token)
            .query(query)
            .send()
            .await?;
        Ok(check(response).await?.json::<Vec<T>>().await?)
    }

    async fn insert<B, T>(&self, table: &str, token: &AccessToken, body: &B) -> Result<T, StoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .request(Method::POST, &Self::table(table), Some(token))
            .header(PREFER, RETURN_REPRESENTATION)
            .json(&[body])
            .send()
            .await?;
        let rows: Vec<T> = check(response).await?.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode(format!("insert into {} returned no row", table)))
    }

    async fn update<B, T>(&self, table: &str, token: &AccessToken, id: i64, body: &B) -> Result<T, StoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .request(Method::PATCH, &Self::table(table), Some(token))
            .query(&[("id", format!("eq.{}", id))])
            .header(PREFER, RETURN_REPRESENTATION)
            .json(body)
            .send()
            .await?;
        let rows: Vec<T> = check(response).await?.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("{} row {}", table, id)))
    }

    async fn delete(&self, table: &str, token: &AccessToken, id: i64) -> Result<(), StoreError> {
        let response = self
            .client
            .request(Method::DELETE, &Self::table(table), Some(token))
            .query(&[("id", format!("eq.{}", id))])
            .header(PREFER, RETURN_REPRESENTATION)
            .send()
            .await?;
        let rows: Vec<serde_json::Value> = check(response).await?.json().await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound(format!("{} row {}", table, id)));
        }
        Ok(())
    }
}

/// Whole table, newest first.
fn newest_first() -> Vec<(&'static str, String)> {
    vec![("select", "*".to_string()), ("order", "created_at.desc".to_string())]
}

/// Single row by primary key, without ordering.
fn row_by_id(id: i64) -> Vec<(&'static str, String)> {
    vec![("select", "*".to_string()), ("id", format!("eq.{}", id))]
}

async fn check(response: Response) -> Result<Response, StoreError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let (status, message) = rejection_message(response).await;
    Err(StoreError::Rejected { status: status.as_u16(), message })
}

#[async_trait]
impl StorageBackend for RemoteBackend {
    fn is_live(&self) -> bool {
        true
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.select(PROJECTS_TABLE, None, &newest_first()).await
    }

    async fn add_project(&self, token: &AccessToken, form: &ProjectForm) -> Mutation<Project> {
        self.insert(PROJECTS_TABLE, token, form).await.map(Some)
    }

    async fn update_project(&self, token: &AccessToken, id: i64, patch: &ProjectPatch) -> Mutation<Project> {
        self.update(PROJECTS_TABLE, token, id, patch).await.map(Some)
    }

    async fn delete_project(&self, token: &AccessToken, id: i64) -> Mutation<()> {
        self.delete(PROJECTS_TABLE, token, id).await.map(Some)
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, StoreError> {
        self.select(CERTIFICATES_TABLE, None, &newest_first()).await
    }

    async fn add_certificate(&self, token: &AccessToken, form: &CertificateForm) -> Mutation<Certificate> {
        self.insert(CERTIFICATES_TABLE, token, form).await.map(Some)
    }

    async fn update_certificate(
        &self,
        token: &AccessToken,
        id: i64,
        patch: &CertificatePatch,
    ) -> Mutation<Certificate> {
        self.update(CERTIFICATES_TABLE, token, id, patch).await.map(Some)
    }

    async fn delete_certificate(&self, token: &AccessToken, id: i64) -> Mutation<()> {
        self.delete(CERTIFICATES_TABLE, token, id).await.map(Some)
    }

    async fn site_settings(&self) -> Result<Option<SiteSettings>, StoreError> {
        let rows: Vec<SiteSettings> = self
            .select(SETTINGS_TABLE, None, &row_by_id(SETTINGS_ROW_ID))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn update_site_settings(&self, token: &AccessToken, patch: &SettingsPatch) -> Mutation<SiteSettings> {
        self.update(SETTINGS_TABLE, token, SETTINGS_ROW_ID, patch).await.map(Some)
    }

    async fn list_messages(&self, token: &AccessToken) -> Result<Vec<Message>, StoreError> {
        self.select(MESSAGES_TABLE, Some(token), &newest_first()).await
    }

    async fn send_message(&self, form: &MessageForm) -> Mutation<()> {
        // Anonymous visitors may insert but not read back.
        let response = self
            .client
            .request(Method::POST, &Self::table(MESSAGES_TABLE), None)
            .header(PREFER, RETURN_MINIMAL)
            .json(&[form])
            .send()
            .await?;
        check(response).await?;
        Ok(Some(()))
    }

    async fn delete_message(&self, token: &AccessToken, id: i64) -> Mutation<()> {
        self.delete(MESSAGES_TABLE, token, id).await.map(Some)
    }

    async fn upload_object(
        &self,
        token: &AccessToken,
        name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<Option<String>, UploadError> {
        self.put_object(token, name, bytes, content_type).await?;
        Ok(Some(self.object_url(name)))
    }
}

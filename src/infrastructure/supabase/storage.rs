use reqwest::{header, Method};

use crate::{
    entities::session::AccessToken,
    errors::UploadError,
    infrastructure::supabase::{client::rejection_message, rest::RemoteBackend},
};

impl RemoteBackend {
    fn object_path(&self, name: &str) -> String {
        format!("{}/{}", urlencoding::encode(&self.bucket), urlencoding::encode(name))
    }

    /// Public URL of an object in the image bucket.
    pub fn object_url(&self, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}",
            self.client.base_url(),
            self.object_path(name)
        )
    }

    pub(crate) async fn put_object(
        &self,
        token: &AccessToken,
        name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), UploadError> {
        if bytes.is_empty() {
            return Err(UploadError::EmptyFile);
        }

        let path = format!("storage/v1/object/{}", self.object_path(name));
        let response = self
            .client
            .request(Method::POST, &path, Some(token))
            .header(header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        if response.status().is_success() {
            tracing::info!(object = %name, "Image stored");
            return Ok(());
        }
        let (status, message) = rejection_message(response).await;
        Err(UploadError::Rejected { status: status.as_u16(), message })
    }
}

use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{web, Error, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    api_errors::ApiError,
    use_cases::{admin::UploadTarget, extractors::AdminSession},
    AppState,
};

#[derive(Debug, MultipartForm)]
pub struct ImageUpload {
    #[multipart(limit = "10MB")]
    pub file: TempFile,
}

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    #[serde(default)]
    pub target: UploadTarget,
}

#[instrument(skip(admin, state, form))]
pub async fn upload_image(
    admin: AdminSession,
    state: web::Data<AppState>,
    query: web::Query<UploadQuery>,
    form: MultipartForm<ImageUpload>,
) -> Result<impl Responder, Error> {
    let form = form.into_inner();
    let file_name = form
        .file
        .file_name
        .clone()
        .unwrap_or_else(|| "upload".to_string());
    let bytes = tokio::fs::read(form.file.file.path())
        .await
        .map_err(ApiError::from)?;

    let outcome = state
        .admin_handler
        .upload_image(admin.token(), &file_name, bytes, query.target)
        .await?;

    Ok(HttpResponse::Created().json(outcome))
}

use actix_web::{get, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        admin_form::{EntityForm, EntityKind, EntityPatch},
        certificate::{CertificateForm, CertificatePatch},
        project::{ProjectForm, ProjectPatch},
        site_settings::SettingsPatch,
    },
    errors::AppError,
    use_cases::extractors::AdminSession,
    AppState,
};

#[get("")]
#[instrument(skip(state, admin))]
pub async fn dashboard(state: web::Data<AppState>, admin: AdminSession) -> Result<impl Responder, AppError> {
    let summary = admin.0.summary();
    let dashboard = state.admin_handler.dashboard(admin.token(), summary).await?;
    Ok(HttpResponse::Ok().json(dashboard))
}

#[instrument(skip(admin, state, form))]
pub async fn create_project(
    admin: AdminSession,
    state: web::Data<AppState>,
    form: web::Json<ProjectForm>,
) -> Result<impl Responder, AppError> {
    let outcome = state
        .admin_handler
        .create(admin.token(), EntityForm::Project(form.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(outcome))
}

#[instrument(skip(admin, state, patch))]
pub async fn update_project(
    admin: AdminSession,
    id: web::Path<i64>,
    state: web::Data<AppState>,
    patch: web::Json<ProjectPatch>,
) -> Result<impl Responder, AppError> {
    let outcome = state
        .admin_handler
        .update(admin.token(), id.into_inner(), EntityPatch::Project(patch.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[instrument(skip(admin, state))]
pub async fn delete_project(
    admin: AdminSession,
    id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let outcome = state
        .admin_handler
        .delete(admin.token(), EntityKind::Project, id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[instrument(skip(admin, state, form))]
pub async fn create_certificate(
    admin: AdminSession,
    state: web::Data<AppState>,
    form: web::Json<CertificateForm>,
) -> Result<impl Responder, AppError> {
    let outcome = state
        .admin_handler
        .create(admin.token(), EntityForm::Certificate(form.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(outcome))
}

#[instrument(skip(admin, state, patch))]
pub async fn update_certificate(
    admin: AdminSession,
    id: web::Path<i64>,
    state: web::Data<AppState>,
    patch: web::Json<CertificatePatch>,
) -> Result<impl Responder, AppError> {
    let outcome = state
        .admin_handler
        .update(admin.token(), id.into_inner(), EntityPatch::Certificate(patch.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[instrument(skip(admin, state))]
pub async fn delete_certificate(
    admin: AdminSession,
    id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let outcome = state
        .admin_handler
        .delete(admin.token(), EntityKind::Certificate, id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[instrument(skip(admin, state))]
pub async fn list_messages(admin: AdminSession, state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.admin_handler.messages(admin.token()).await)
}

#[instrument(skip(admin, state))]
pub async fn delete_message(
    admin: AdminSession,
    id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let outcome = state.admin_handler.delete_message(admin.token(), id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[instrument(skip(admin, state, patch))]
pub async fn update_settings(
    admin: AdminSession,
    state: web::Data<AppState>,
    patch: web::Json<SettingsPatch>,
) -> Result<impl Responder, AppError> {
    let outcome = state.admin_handler.update_settings(admin.token(), patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

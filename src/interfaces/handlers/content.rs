use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::project::filter_by_category,
    use_cases::extractors::SiteContext,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
}

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectQuery>,
) -> impl Responder {
    let projects = state.content.projects().await;
    HttpResponse::Ok().json(filter_by_category(projects, query.category.as_deref()))
}

#[instrument(skip(state))]
pub async fn list_certificates(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.content.certificates().await)
}

pub async fn get_settings(site: SiteContext) -> impl Responder {
    HttpResponse::Ok().json(site.0)
}

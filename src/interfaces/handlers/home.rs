use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::instrument;

use crate::{
    entities::{
        certificate::Certificate,
        project::{categories, Project},
        site_settings::SiteSettings,
    },
    use_cases::extractors::SiteContext,
    AppState,
};

#[derive(Serialize)]
struct HomeView {
    settings: Option<SiteSettings>,
    projects: Vec<Project>,
    categories: Vec<String>,
    certificates: Vec<Certificate>,
    live: bool,
    version: &'static str,
}

/// Everything the public landing page renders, in one response.
#[get("/")]
#[instrument(skip(state, site))]
pub async fn home(state: web::Data<AppState>, site: SiteContext) -> impl Responder {
    let (projects, certificates) = futures::join!(state.content.projects(), state.content.certificates());

    HttpResponse::Ok().json(HomeView {
        settings: site.0,
        categories: categories(&projects),
        projects,
        certificates,
        live: state.content.is_live(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

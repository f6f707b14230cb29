use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::{header, Method},
    middleware::NormalizePath,
    web, App, Error,
};
use tracing_actix_web::TracingLogger;

mod domain;
mod interfaces;
mod infrastructure;
pub mod api_errors;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{ai, demo, supabase, utils};

use ai::GeminiClient;
use demo::{DemoAuth, DemoBackend};
use middlewares::{auth::AuthMiddleware, maintenance::MaintenanceMiddleware};
use repositories::{auth_provider::AuthProvider, language_model::LanguageModel, storage_backend::StorageBackend};
use supabase::{RemoteBackend, SupabaseAuth, SupabaseClient};
use use_cases::{
    admin::AdminHandler, auth::AuthHandler, chat::ChatAdapter, contact::ContactHandler,
    content::ContentService,
};

pub struct AppState {
    pub content: ContentService,
    pub auth_handler: AuthHandler,
    pub admin_handler: AdminHandler,
    pub contact_handler: ContactHandler,
    pub chat_adapter: ChatAdapter,
}

impl AppState {
    /// Picks the store and auth backends once: hosted when credentials are
    /// configured, built-in demo content otherwise.
    pub fn new(config: &settings::AppConfig) -> anyhow::Result<Self> {
        let backend: Arc<dyn StorageBackend>;
        let auth: Arc<dyn AuthProvider>;
        if config.is_store_configured() {
            let client = SupabaseClient::new(config)?;
            tracing::info!(store = %client.base_url(), "Using hosted store");
            backend = Arc::new(RemoteBackend::new(client.clone(), config.storage_bucket.clone()));
            auth = Arc::new(SupabaseAuth::new(client));
        } else {
            tracing::warn!("Store credentials missing, serving demo content");
            backend = Arc::new(DemoBackend);
            auth = Arc::new(DemoAuth);
        }

        let model: Option<Arc<dyn LanguageModel>> = if config.is_ai_configured() {
            Some(Arc::new(GeminiClient::new(config)?) as Arc<dyn LanguageModel>)
        } else {
            tracing::warn!("Gemini API key missing, chat will answer with a notice");
            None
        };

        Ok(Self::from_parts(backend, auth, model))
    }

    pub fn from_parts(
        backend: Arc<dyn StorageBackend>,
        auth: Arc<dyn AuthProvider>,
        model: Option<Arc<dyn LanguageModel>>,
    ) -> Self {
        let content = ContentService::new(backend);

        AppState {
            auth_handler: AuthHandler::new(auth),
            admin_handler: AdminHandler::new(content.clone()),
            contact_handler: ContactHandler::new(content.clone()),
            chat_adapter: ChatAdapter::new(content.clone(), model),
            content,
        }
    }
}

fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allowed_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::LOCATION])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }
    origins.iter().fold(cors, |cors, origin| cors.allowed_origin(origin))
}

/// Full application: routes, gates and the ambient middleware stack.
/// The returned app owns everything it needs; `cors_origins` is only read.
pub fn build_app(
    state: web::Data<AppState>,
    cors_origins: &[String],
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody + use<>>,
        Error = Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(state)
        .configure(routes::configure_routes)
        .wrap(AuthMiddleware)
        .wrap(MaintenanceMiddleware)
        .wrap(cors(cors_origins))
        .wrap(NormalizePath::trim())
        .wrap(TracingLogger::default())
}

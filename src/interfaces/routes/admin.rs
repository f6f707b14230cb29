use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

use crate::{
    api_errors::multipart_error_handler,
    handlers::{admin, auth, system::admin_health_check, uploads},
};

const UPLOAD_TOTAL_LIMIT: usize = 12 * 1024 * 1024;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(UPLOAD_TOTAL_LIMIT)
                    .error_handler(multipart_error_handler)
            )
            .service(admin::dashboard)
            .service(admin_health_check)
            .service(auth::logout)
            .service(
                web::resource("/projects")
                    .route(web::post().to(admin::create_project))
            )
            .service(
                web::resource("/projects/{id}")
                    .route(web::patch().to(admin::update_project))
                    .route(web::delete().to(admin::delete_project))
            )
            .service(
                web::resource("/certificates")
                    .route(web::post().to(admin::create_certificate))
            )
            .service(
                web::resource("/certificates/{id}")
                    .route(web::patch().to(admin::update_certificate))
                    .route(web::delete().to(admin::delete_certificate))
            )
            .service(
                web::resource("/messages")
                    .route(web::get().to(admin::list_messages))
            )
            .service(
                web::resource("/messages/{id}")
                    .route(web::delete().to(admin::delete_message))
            )
            .service(
                web::resource("/settings")
                    .route(web::patch().to(admin::update_settings))
            )
            .service(
                web::resource("/uploads")
                    .route(web::post().to(uploads::upload_image))
            )
    );
}

use actix_web::web;

use crate::handlers::{chat, contact, content};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects")
            .route(web::get().to(content::list_projects))
    )
    .service(
        web::resource("/certificates")
            .route(web::get().to(content::list_certificates))
    )
    .service(
        web::resource("/settings")
            .route(web::get().to(content::get_settings))
    )
    .service(
        web::resource("/contact")
            .route(web::post().to(contact::send_message))
    )
    .service(
        web::resource("/chat")
            .route(web::post().to(chat::chat))
    );
}

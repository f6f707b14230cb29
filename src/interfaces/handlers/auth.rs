use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::{ADMIN_PATH, LOGIN_PATH},
    entities::session::LoginForm,
    errors::AuthError,
    use_cases::{
        auth::GateStatus,
        extractors::{bearer_token, AdminSession},
    },
    AppState,
};

#[post("/login")]
#[instrument(skip(state, form))]
pub async fn login(
    state: web::Data<AppState>,
    form: web::Json<LoginForm>,
) -> Result<impl Responder, AuthError> {
    let response = state.auth_handler.login(form.into_inner(), ADMIN_PATH).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Reports where the gate lands for the caller's bearer token.
#[get("/login")]
#[instrument(skip(state, req))]
pub async fn login_status(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let token = bearer_token(&req);
    let gate_state = state.auth_handler.resolve(token.as_ref()).await;

    HttpResponse::Ok().json(serde_json::json!({
        "login_path": LOGIN_PATH,
        "gate": GateStatus::from(&gate_state),
    }))
}

#[post("/logout")]
#[instrument(skip(state, admin))]
pub async fn logout(state: web::Data<AppState>, admin: AdminSession) -> Result<impl Responder, AuthError> {
    state.auth_handler.logout(admin.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Logged out successfully",
        "redirect_to": LOGIN_PATH,
    })))
}

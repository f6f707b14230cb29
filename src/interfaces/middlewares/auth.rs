use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{
    constants::LOGIN_PATH,
    errors::AuthError,
    use_cases::{
        auth::{AuthState, GateStatus},
        extractors::extract_bearer,
        maintenance::is_admin_path,
    },
    AppState,
};

/// Runs the auth gate for every `/admin` request. Unauthenticated requests
/// are answered with 401 and a redirect to the login route; on success the
/// session is stored in request extensions for `AdminSession`.
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if !requires_session(req.path(), req.method().as_str()) {
                return service.call(req).await;
            }

            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| {
                    tracing::error!("AppState missing in middleware");
                    AuthError::NotConfigured
                })?;

            let token = extract_bearer(req.headers());
            if token.is_none() {
                tracing::warn!(path = %req.path(), "Missing or malformed Authorization header");
            }

            match state.auth_handler.resolve(token.as_ref()).await {
                AuthState::Authenticated(session) => {
                    req.extensions_mut().insert(session);
                    service.call(req).await
                }
                other => {
                    tracing::warn!(path = %req.path(), "Admin request without a valid session");
                    Ok(custom_error_response(req, redirect_to_login(&other)))
                }
            }
        })
    }
}

fn requires_session(path: &str, method: &str) -> bool {
    method != "OPTIONS" && is_admin_path(path)
}

fn redirect_to_login(state: &AuthState) -> HttpResponse {
    HttpResponse::Unauthorized()
        .insert_header((header::LOCATION, LOGIN_PATH))
        .json(serde_json::json!({
            "error": "Authentication required",
            "redirect_to": LOGIN_PATH,
            "gate": GateStatus::from(state),
        }))
}

fn custom_error_response(req: ServiceRequest, res: HttpResponse) -> ServiceResponse<BoxBody> {
    req.into_response(res)
}

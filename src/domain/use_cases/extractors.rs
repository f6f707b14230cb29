use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{
    entities::{
        session::{AccessToken, Session},
        site_settings::SiteSettings,
    },
    errors::AuthError,
};

/// Session resolved by the auth middleware for `/admin` routes.
/// Returns 401 when the request never passed the gate.
#[derive(Debug)]
pub struct AdminSession(pub Session);

impl AdminSession {
    pub fn token(&self) -> &AccessToken {
        &self.0.access_token
    }
}

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Session>() {
            Some(session) => ready(Ok(AdminSession(session.clone()))),
            None => ready(Err(AuthError::InvalidSession.into())),
        }
    }
}

/// Settings fetched once per request by the maintenance middleware.
/// `None` when no settings row is available.
#[derive(Debug, Clone, Default)]
pub struct SiteContext(pub Option<SiteSettings>);

impl FromRequest for SiteContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(req.extensions().get::<SiteContext>().cloned().unwrap_or_default()))
    }
}

/// Bearer token from the `Authorization` header, if any.
pub fn bearer_token(req: &HttpRequest) -> Option<AccessToken> {
    extract_bearer(req.headers())
}

pub fn extract_bearer(headers: &actix_web::http::header::HeaderMap) -> Option<AccessToken> {
    headers
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(AccessToken::new(parts[1]))
            } else {
                None
            }
        })
}

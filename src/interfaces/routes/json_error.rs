use actix_web::{
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    web, HttpResponse, ResponseError,
};
use serde_json::json;

use crate::handlers::json_error::json_error;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        JsonError::from(err).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        path_error(err)
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        query_error(err)
    }));
}

fn path_error(err: PathError) -> actix_web::Error {
    let response = json_error(StatusCode::BAD_REQUEST, "Invalid path parameter", &err.to_string());
    InternalError::from_response(err, response).into()
}

fn query_error(err: QueryPayloadError) -> actix_web::Error {
    let response = json_error(StatusCode::BAD_REQUEST, "Invalid query string", &err.to_string());
    InternalError::from_response(err, response).into()
}

#[derive(Debug)]
pub struct JsonError {
    message: String,
    status: StatusCode
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status).json(json!({ "error": self.message }))
    }
}

impl From<JsonPayloadError> for JsonError {
    fn from(err: JsonPayloadError) -> Self {
        let status = match err {
            JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        JsonError {
            message: format!("JSON payload error: {}", err),
            status,
        }
    }
}

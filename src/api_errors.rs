use actix_multipart::MultipartError;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use derive_more::Display;
use serde_json::json;

/// Problems with the shape of an upload request, before any bucket call.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display("Bad request: {}", _0)]
    BadRequest(String),

    #[display("Invalid content type: {}", _0)]
    InvalidContentType(String),

    #[display("Payload too large: {}", _0)]
    PayloadTooLarge(String),

    #[display("IO error: {}", _0)]
    IoError(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(_) => HttpResponse::BadRequest().json(json!({
                "error": "bad_request",
                "message": self.to_string()
            })),
            ApiError::InvalidContentType(_) => HttpResponse::UnsupportedMediaType().json(json!({
                "error": "invalid_content_type",
                "message": self.to_string()
            })),
            ApiError::PayloadTooLarge(_) => HttpResponse::PayloadTooLarge().json(json!({
                "error": "payload_too_large",
                "message": self.to_string()
            })),
            ApiError::IoError(_) => HttpResponse::InternalServerError().json(json!({
                "error": "io_error",
                "message": self.to_string()
            })),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::IoError(err.to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        match err {
            MultipartError::ContentTypeIncompatible => {
                ApiError::InvalidContentType("Expected multipart/form-data".to_string())
            }
            MultipartError::Payload(_) => {
                ApiError::PayloadTooLarge("File too large".to_string())
            }
            _ => ApiError::BadRequest(err.to_string()),
        }
    }
}

/// Error handler for `MultipartFormConfig`.
pub fn multipart_error_handler(err: MultipartError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected multipart upload");
    ApiError::from(err).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn incompatible_content_type_is_unsupported_media() {
        let err = ApiError::from(MultipartError::ContentTypeIncompatible);
        assert_eq!(err.error_response().status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}

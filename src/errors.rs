use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    InvalidInput(String),
    Store(StoreError),
    Upload(UploadError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::Store(err) => write!(f, "{}", err),
            AppError::Upload(err) => write!(f, "{}", err),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            _ => {
                serde_json::json!({"error": self.to_string()})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::BAD_GATEWAY,
            AppError::Upload(UploadError::EmptyFile) => StatusCode::BAD_REQUEST,
            AppError::Upload(UploadError::NotAnImage) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Upload(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::ValidationError(field_errors)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        AppError::Upload(err)
    }
}

/// Failure of a table operation against the remote store.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum StoreError {
    #[display("Store request failed: {_0}")]
    Transport(String),

    #[display("Store rejected the operation ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[display("Unexpected store response: {_0}")]
    Decode(String),

    #[display("Record not found: {_0}")]
    NotFound(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Display, Clone, PartialEq)]
pub enum UploadError {
    #[display("Image upload failed: {_0}")]
    Transport(String),

    #[display("Bucket rejected the upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[display("Uploaded file is empty")]
    EmptyFile,

    #[display("Only image files can be uploaded")]
    NotAnImage,
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Transport(err.to_string())
    }
}

#[derive(Debug, Display, Clone, PartialEq)]
pub enum AuthError {
    #[display("{_0}")]
    WrongCredentials(String),

    #[display("Missing credentials")]
    MissingCredentials,

    #[display("Invalid or expired session")]
    InvalidSession,

    #[display("Authentication is not configured")]
    NotConfigured,

    #[display("Authentication provider error: {_0}")]
    Provider(String),
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({"error": self.to_string()}))
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            AuthError::WrongCredentials(_) => StatusCode::UNAUTHORIZED,
            AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
            AuthError::InvalidSession => StatusCode::UNAUTHORIZED,
            AuthError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(_: ValidationErrors) -> Self {
        AuthError::MissingCredentials
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Provider(err.to_string())
    }
}

/// Failure talking to the generative-language API. Never leaves the chat
/// adapter; it is turned into a reply string there.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum ChatError {
    #[display("{_0}")]
    Transport(String),

    #[display("{message} (status {status})")]
    Api { status: u16, message: String },

    #[display("the model returned no reply")]
    EmptyReply,

    #[display("the model returned no reply ({_0})")]
    Blocked(String),
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Errors from the template store. Each maps to one HTTP status so handlers
/// can return `Result<_, StoreError>` directly.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("template name cannot be empty")]
    EmptyName,

    /// The name contains characters that break the URL paths it is embedded
    /// in, so a save under it could never be reopened.
    #[error("template name '{0}' contains unsupported characters")]
    InvalidName(String),

    /// A save without the overwrite flag hit an existing name. The client
    /// surfaces this as a field-level validation error, not a failure toast.
    #[error("a template named '{0}' already exists")]
    DuplicateName(String),

    #[error("template '{0}' not found")]
    NotFound(String),

    /// The JSON artifact does not deserialize back into a block list.
    #[error("invalid template artifact: {0}")]
    InvalidArtifact(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::EmptyName => StatusCode::BAD_REQUEST,
            StoreError::InvalidName(_) => StatusCode::BAD_REQUEST,
            StoreError::InvalidArtifact(_) => StatusCode::BAD_REQUEST,
            StoreError::DuplicateName(_) => StatusCode::CONFLICT,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

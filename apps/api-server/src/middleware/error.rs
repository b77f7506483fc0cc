//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use postplan_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<postplan_core::error::DomainError> for AppError {
    fn from(err: postplan_core::error::DomainError) -> Self {
        use postplan_core::error::DomainError;
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::StatusTransition { from, to } => {
                AppError::BadRequest(format!("status cannot move backward: {} -> {}", from, to))
            }
        }
    }
}

impl From<postplan_core::error::RepoError> for AppError {
    fn from(err: postplan_core::error::RepoError) -> Self {
        use postplan_core::error::RepoError;
        match err {
            RepoError::NotFound => AppError::NotFound("post not found".to_string()),
            RepoError::Backend(msg) => {
                tracing::error!("Storage backend error: {}", msg);
                AppError::Internal("storage error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

//! User Store Error Types
//!
//! This module provides user-store error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{IdError, UserId};
use thiserror::Error;

/// User-store result type alias
pub type UserResult<T> = Result<T, UserError>;

/// User-store error variants
///
/// Each variant maps to exactly one HTTP status code.
#[derive(Debug, Error)]
pub enum UserError {
    /// Path identifier is not a positive integer
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Request body is not the expected JSON document
    #[error("malformed input: {0}")]
    MalformedBody(String),

    /// Name failed validation
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// No user with this identifier
    #[error("user {0} not found")]
    NotFound(UserId),

    /// Caller-supplied identifier already in use
    #[error("user {0} already exists")]
    IdTaken(UserId),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::InvalidId(_) | UserError::MalformedBody(_) | UserError::InvalidName(_) => {
                StatusCode::BAD_REQUEST
            }
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::IdTaken(_) => StatusCode::CONFLICT,
            UserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::InvalidId(_) | UserError::MalformedBody(_) | UserError::InvalidName(_) => {
                ErrorKind::BadRequest
            }
            UserError::NotFound(_) => ErrorKind::NotFound,
            UserError::IdTaken(_) => ErrorKind::Conflict,
            UserError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let message = self.to_string();
        match self {
            UserError::InvalidId(_) => {
                AppError::bad_request(message).with_action("Use a positive integer user id")
            }
            UserError::MalformedBody(_) => AppError::bad_request(message)
                .with_action(r#"Send a JSON object such as {"name": "Ada"}"#),
            UserError::InvalidName(_) => AppError::bad_request(message),
            UserError::NotFound(_) => AppError::not_found(message),
            UserError::IdTaken(_) => {
                AppError::conflict(message).with_action("Omit the id to have one assigned")
            }
            UserError::Internal(_) => AppError::internal(message),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UserError::Internal(msg) => {
                tracing::error!(message = %msg, "User store internal error");
            }
            UserError::IdTaken(id) => {
                tracing::warn!(user_id = %id, "Create rejected, id already taken");
            }
            _ => {
                tracing::debug!(error = %self, "User request rejected");
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<IdError> for UserError {
    fn from(err: IdError) -> Self {
        UserError::InvalidId(err.to_string())
    }
}

impl From<serde_json::Error> for UserError {
    fn from(err: serde_json::Error) -> Self {
        UserError::MalformedBody(err.to_string())
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        err.to_app_error().with_source(err)
    }
}

//! Shipping Error Types
//!
//! Calculator precondition failures, integrated with `kernel::error::AppError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Shipping result type alias
pub type ShippingResult<T> = Result<T, ShippingError>;

/// Shipping error variants
///
/// Messages always start with the failed precondition ("invalid weight",
/// "invalid zone") so callers can match on them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShippingError {
    #[error("invalid weight: {0} kg (must be greater than 0 and at most 50)")]
    InvalidWeight(f64),

    #[error("invalid zone: {0:?} (expected one of Domestic, International, Express)")]
    InvalidZone(String),

    /// Quote request body is not the expected JSON document
    #[error("malformed input: {0}")]
    MalformedBody(String),
}

impl ShippingError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::BadRequest
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::bad_request(self.to_string())
    }
}

impl IntoResponse for ShippingError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Shipping quote rejected");
        AppError::from(self).into_response()
    }
}

impl From<ShippingError> for AppError {
    fn from(err: ShippingError) -> Self {
        err.to_app_error().with_source(err)
    }
}

impl From<serde_json::Error> for ShippingError {
    fn from(err: serde_json::Error) -> Self {
        ShippingError::MalformedBody(err.to_string())
    }
}

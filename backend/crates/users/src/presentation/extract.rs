//! Request extractors

use crate::error::UserError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use kernel::id::UserId;

/// `{id}` path segment parsed as a [`UserId`].
///
/// Runs before any body extractor, so an invalid id is reported
/// ahead of a malformed body.
#[derive(Debug, Clone, Copy)]
pub struct UserIdParam(pub UserId);

impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = UserError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| UserError::InvalidId(rejection.body_text()))?;

        let id = raw.parse::<UserId>()?;
        Ok(Self(id))
    }
}

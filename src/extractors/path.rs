//! Path segment extractors. Rejections (e.g. invalid UTF-8 after percent-decoding) become
//! `AppError` so every failure keeps the JSON error body.

use crate::error::AppError;
use crate::service::parse_id;
use async_trait::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// `{id}` segment. Anything but a plain run of ASCII digits that fits in `i64` is `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PropertyId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(rejection.body_text()))?;
        parse_id(&raw).map(PropertyId)
    }
}

/// Percent-decoded `{tipo}` / `{cidade}` segment used as an exact-match filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterValue(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for FilterValue
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;
        Ok(FilterValue(value))
    }
}

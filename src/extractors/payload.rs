//! Extract a validated `PropertyPayload` from a JSON request body.

use crate::error::AppError;
use crate::model::PropertyPayload;
use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

/// Create/update body. Missing content type, malformed JSON, a missing field or a wrong-typed
/// field all reject with `AppError::InvalidInput` before any store access. A body that cannot be
/// buffered (e.g. past the size limit) keeps its own status via `AppError::Body`.
#[derive(Debug, Clone)]
pub struct PropertyBody(pub PropertyPayload);

#[async_trait]
impl<S> FromRequest<S> for PropertyBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::BytesRejection(inner) => AppError::Body(inner),
                other => AppError::InvalidInput(other.body_text()),
            })?;
        PropertyPayload::from_json(value).map(PropertyBody)
    }
}

//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Body text returned for any id with no matching row.
pub const NOT_FOUND_MESSAGE: &str = "Imóvel não encontrado";
/// Body text returned when a create/update payload is missing a field or has the wrong shape.
pub const MISSING_FIELDS_MESSAGE: &str = "Campos obrigatórios ausentes";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: imovel {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("database: {0}")]
    Store(#[from] sqlx::Error),
    /// Body could not be buffered (over the size limit, or the stream failed). Keeps its status.
    #[error("request body: {0}")]
    Body(#[from] BytesRejection),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(id) => {
                tracing::debug!(id = %id, "imovel not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            AppError::InvalidInput(detail) => {
                tracing::warn!(detail = %detail, "rejected payload");
                (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE.to_string())
            }
            AppError::Store(e) => {
                tracing::error!(error = %e, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Body(rejection) => {
                tracing::warn!(error = %rejection, "unreadable request body");
                (rejection.status(), rejection.body_text())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

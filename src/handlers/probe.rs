//! Operational probes: liveness, store readiness, build identity.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ProbeStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
pub struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

pub async fn health() -> Json<ProbeStatus> {
    Json(ProbeStatus {
        status: "ok",
        database: None,
    })
}

/// 503 while the store cannot answer a trivial query.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ProbeStatus {
                status: "ok",
                database: Some("ok"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeStatus {
                    status: "degraded",
                    database: Some("unavailable"),
                }),
            )
        }
    }
}

pub async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

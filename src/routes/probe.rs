//! GET /health, GET /ready, GET /version.

use crate::handlers::probe::{health, ready, version};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn probe_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

//! Router assembly.

mod probe;
mod property;

pub use probe::probe_routes;
pub use property::property_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: probes plus listing routes, with body limit and request tracing.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(probe_routes(state.clone()))
        .merge(property_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}

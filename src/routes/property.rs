//! Listing routes under `/imoveis`.
//! Static segments (`tipo`, `cidade`) take priority over the `:id` capture.

use crate::handlers::property::{by_cidade, by_tipo, by_tipo_query, create, delete, list, read, update};
use crate::state::AppState;
use axum::{
    routing::{delete as delete_route, get, put},
    Router,
};

pub fn property_routes(state: AppState) -> Router {
    Router::new()
        .route("/imoveis", get(list).post(create))
        .route("/imoveis/tipo", get(by_tipo_query))
        .route("/imoveis/tipo/:tipo", get(by_tipo))
        .route("/imoveis/cidade/:cidade", get(by_cidade))
        .route("/imoveis/:id", get(read))
        .route("/imoveis/:id/update", put(update))
        .route("/imoveis/:id/delete", delete_route(delete))
        .with_state(state)
}

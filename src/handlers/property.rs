//! Listing handlers: list, read, create, update, delete, filter by tipo/cidade.

use crate::error::AppError;
use crate::extractors::{FilterValue, PropertyBody, PropertyId};
use crate::response::{message, property_list, property_one, CREATED_MESSAGE, DELETED_MESSAGE};
use crate::service::PropertyService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = PropertyService::list(state.store.as_ref()).await?;
    Ok(property_list(rows))
}

pub async fn read(
    State(state): State<AppState>,
    PropertyId(id): PropertyId,
) -> Result<impl IntoResponse, AppError> {
    let row = PropertyService::get(state.store.as_ref(), id).await?;
    Ok(property_one(row))
}

pub async fn create(
    State(state): State<AppState>,
    PropertyBody(payload): PropertyBody,
) -> Result<impl IntoResponse, AppError> {
    PropertyService::create(state.store.as_ref(), &payload).await?;
    Ok(message(StatusCode::CREATED, CREATED_MESSAGE))
}

pub async fn update(
    State(state): State<AppState>,
    PropertyId(id): PropertyId,
    PropertyBody(payload): PropertyBody,
) -> Result<impl IntoResponse, AppError> {
    let row = PropertyService::update(state.store.as_ref(), id, &payload).await?;
    Ok(property_one(row))
}

pub async fn delete(
    State(state): State<AppState>,
    PropertyId(id): PropertyId,
) -> Result<impl IntoResponse, AppError> {
    PropertyService::delete(state.store.as_ref(), id).await?;
    Ok(message(StatusCode::OK, DELETED_MESSAGE))
}

/// `tipo` arrives percent-decoded.
pub async fn by_tipo(
    State(state): State<AppState>,
    FilterValue(tipo): FilterValue,
) -> Result<impl IntoResponse, AppError> {
    let rows = PropertyService::by_tipo(state.store.as_ref(), &tipo).await?;
    Ok(property_list(rows))
}

#[derive(Debug, Deserialize)]
pub struct TipoQuery {
    #[serde(default)]
    pub tipo: String,
}

/// `GET /imoveis/tipo?tipo=...`; without the parameter it matches the empty string.
pub async fn by_tipo_query(
    State(state): State<AppState>,
    Query(query): Query<TipoQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = PropertyService::by_tipo(state.store.as_ref(), &query.tipo).await?;
    Ok(property_list(rows))
}

pub async fn by_cidade(
    State(state): State<AppState>,
    FilterValue(cidade): FilterValue,
) -> Result<impl IntoResponse, AppError> {
    let rows = PropertyService::by_cidade(state.store.as_ref(), &cidade).await?;
    Ok(property_list(rows))
}

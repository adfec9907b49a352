//! Response envelopes: `{"imoveis": [...]}` for lists, `{"message": ...}` for acknowledgments.

use crate::model::Property;
use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const CREATED_MESSAGE: &str = "Imóvel adicionado com sucesso!";
pub const DELETED_MESSAGE: &str = "Imóvel deletado com sucesso!";

#[derive(Serialize)]
pub struct PropertyList {
    pub imoveis: Vec<Property>,
}

#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}

pub fn property_list(imoveis: Vec<Property>) -> (StatusCode, Json<PropertyList>) {
    (StatusCode::OK, Json(PropertyList { imoveis }))
}

pub fn property_one(property: Property) -> (StatusCode, Json<Property>) {
    (StatusCode::OK, Json(property))
}

pub fn message(status: StatusCode, message: &'static str) -> (StatusCode, Json<Message>) {
    (status, Json(Message { message }))
}

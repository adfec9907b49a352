//! Create/update body for a listing.

use crate::error::AppError;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use super::Property;

/// Every non-id field of [`Property`], all required. A caller-supplied `id` is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyPayload {
    pub logradouro: String,
    pub tipo_logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub cep: String,
    pub tipo: String,
    pub valor: f64,
    pub data_aquisicao: NaiveDate,
}

impl PropertyPayload {
    /// Structural validation of an arbitrary JSON body: object shape, presence, then field types.
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        if !body.is_object() {
            return Err(AppError::InvalidInput("body must be a JSON object".into()));
        }
        serde_json::from_value(body).map_err(|e| AppError::InvalidInput(e.to_string()))
    }

    /// Record this payload would produce once the store has assigned `id`.
    pub fn into_property(self, id: i64) -> Property {
        Property {
            id,
            logradouro: self.logradouro,
            tipo_logradouro: self.tipo_logradouro,
            bairro: self.bairro,
            cidade: self.cidade,
            cep: self.cep,
            tipo: self.tipo,
            valor: self.valor,
            data_aquisicao: self.data_aquisicao,
        }
    }
}

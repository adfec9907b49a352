//! Row-level representation of one `imoveis` row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A single listing. Field names match the `imoveis` columns and the JSON wire format.
///
/// `valor` is carried as `f64` so it always serializes as a JSON number; `cep` stays text so
/// leading zeros survive; `data_aquisicao` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub logradouro: String,
    pub tipo_logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub cep: String,
    pub tipo: String,
    pub valor: f64,
    pub data_aquisicao: NaiveDate,
}

/// Positional mapping over the fixed select list in [`crate::sql::COLUMNS`].
impl<'r> FromRow<'r, PgRow> for Property {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Property {
            id: row.try_get(0)?,
            logradouro: row.try_get(1)?,
            tipo_logradouro: row.try_get(2)?,
            bairro: row.try_get(3)?,
            cidade: row.try_get(4)?,
            cep: row.try_get(5)?,
            tipo: row.try_get(6)?,
            valor: row.try_get(7)?,
            data_aquisicao: row.try_get(8)?,
        })
    }
}

//! Persistence seam for listings: the `PropertyStore` contract and its PostgreSQL implementation.

mod pg;
#[cfg(test)]
pub(crate) mod memory;

pub use pg::{ensure_imoveis_table, PgPropertyStore};

use crate::error::AppError;
use crate::model::{Property, PropertyPayload};
use async_trait::async_trait;

/// One call = one store connection, released before the call returns on every path.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// All rows in store iteration order.
    async fn list_all(&self) -> Result<Vec<Property>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Property>, AppError>;

    /// Insert and return the store-assigned id.
    async fn insert(&self, payload: &PropertyPayload) -> Result<i64, AppError>;

    /// Full replace of every non-id field, then re-read by id on the same connection.
    /// `None` when the re-read finds no row.
    async fn update(&self, id: i64, payload: &PropertyPayload) -> Result<Option<Property>, AppError>;

    /// Existence check followed by delete. `false` when no row had that id.
    /// The two statements are not isolated from concurrent writers.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    async fn find_by_tipo(&self, tipo: &str) -> Result<Vec<Property>, AppError>;

    async fn find_by_cidade(&self, cidade: &str) -> Result<Vec<Property>, AppError>;

    /// Round-trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

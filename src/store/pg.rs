//! `PropertyStore` over a PostgreSQL pool. Every operation holds one pooled connection; the
//! `PoolConnection` guard hands it back on drop, including early returns via `?`.

use super::PropertyStore;
use crate::error::AppError;
use crate::model::{Property, PropertyPayload};
use crate::sql::{
    CREATE_TABLE, DELETE_BY_ID, EXISTS_BY_ID, INSERT, SELECT_ALL, SELECT_BY_CIDADE, SELECT_BY_ID,
    SELECT_BY_TIPO, UPDATE_BY_ID,
};
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

/// Create the `imoveis` table if it does not exist. Idempotent; never alters an existing table.
pub async fn ensure_imoveis_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgPropertyStore {
    pool: PgPool,
}

impl PgPropertyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn fetch_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<Property>, AppError> {
    tracing::debug!(sql = SELECT_BY_ID, id, "query");
    let row = sqlx::query_as::<_, Property>(SELECT_BY_ID)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}

async fn fetch_where(
    conn: &mut PgConnection,
    sql: &'static str,
    value: &str,
) -> Result<Vec<Property>, AppError> {
    tracing::debug!(sql = sql, value = %value, "query");
    let rows = sqlx::query_as::<_, Property>(sql)
        .bind(value)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

#[async_trait]
impl PropertyStore for PgPropertyStore {
    async fn list_all(&self) -> Result<Vec<Property>, AppError> {
        let mut conn = self.pool.acquire().await?;
        tracing::debug!(sql = SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Property>(SELECT_ALL)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Property>, AppError> {
        let mut conn = self.pool.acquire().await?;
        fetch_by_id(&mut conn, id).await
    }

    async fn insert(&self, p: &PropertyPayload) -> Result<i64, AppError> {
        let mut conn = self.pool.acquire().await?;
        tracing::debug!(sql = INSERT, payload = ?p, "query");
        let id = sqlx::query_scalar::<_, i64>(INSERT)
            .bind(&p.logradouro)
            .bind(&p.tipo_logradouro)
            .bind(&p.bairro)
            .bind(&p.cidade)
            .bind(&p.cep)
            .bind(&p.tipo)
            .bind(p.valor)
            .bind(p.data_aquisicao)
            .fetch_one(&mut *conn)
            .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, p: &PropertyPayload) -> Result<Option<Property>, AppError> {
        let mut conn = self.pool.acquire().await?;
        tracing::debug!(sql = UPDATE_BY_ID, id, payload = ?p, "query");
        let result = sqlx::query(UPDATE_BY_ID)
            .bind(&p.logradouro)
            .bind(&p.tipo_logradouro)
            .bind(&p.bairro)
            .bind(&p.cidade)
            .bind(&p.cep)
            .bind(&p.tipo)
            .bind(p.valor)
            .bind(p.data_aquisicao)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        tracing::debug!(rows_affected = result.rows_affected(), "update applied");
        fetch_by_id(&mut conn, id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut conn = self.pool.acquire().await?;
        tracing::debug!(sql = EXISTS_BY_ID, id, "query");
        let exists = sqlx::query_scalar::<_, bool>(EXISTS_BY_ID)
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
        if !exists {
            return Ok(false);
        }
        tracing::debug!(sql = DELETE_BY_ID, id, "query");
        sqlx::query(DELETE_BY_ID).bind(id).execute(&mut *conn).await?;
        Ok(true)
    }

    async fn find_by_tipo(&self, tipo: &str) -> Result<Vec<Property>, AppError> {
        let mut conn = self.pool.acquire().await?;
        fetch_where(&mut conn, SELECT_BY_TIPO, tipo).await
    }

    async fn find_by_cidade(&self, cidade: &str) -> Result<Vec<Property>, AppError> {
        let mut conn = self.pool.acquire().await?;
        fetch_where(&mut conn, SELECT_BY_CIDADE, cidade).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

//! Database credentials and the connection factory.

use super::{env_var, parse_or};
use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::fmt;
use std::path::PathBuf;

/// Everything needed to open store connections. Built once at startup and handed to
/// [`connect_pool`]; nothing else keeps connection state.
#[derive(Clone, PartialEq)]
pub struct DbConfig {
    pub username: String,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    /// CA bundle; when set the server certificate must chain to it.
    pub ssl_ca: Option<PathBuf>,
    pub max_connections: u32,
}

impl DbConfig {
    /// `DB_USERNAME` and `DB_DATABASE` are required. `DB_PASSWORD`, `DB_HOST` (localhost),
    /// `DB_PORT` (5432), `DB_SSL_CA` and `DB_MAX_CONNECTIONS` (5) are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(DbConfig {
            username: lookup("DB_USERNAME").ok_or(ConfigError::Missing("DB_USERNAME"))?,
            password: lookup("DB_PASSWORD"),
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or(&lookup, "DB_PORT", 5432)?,
            database: lookup("DB_DATABASE").ok_or(ConfigError::Missing("DB_DATABASE"))?,
            ssl_ca: lookup("DB_SSL_CA").map(PathBuf::from),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let mut opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .database(&self.database);
        if let Some(password) = &self.password {
            opts = opts.password(password);
        }
        if let Some(ca) = &self.ssl_ca {
            opts = opts.ssl_mode(PgSslMode::VerifyCa).ssl_root_cert(ca);
        }
        opts
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("ssl_ca", &self.ssl_ca)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Connection factory. Handlers borrow one pooled connection per operation.
pub async fn connect_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}

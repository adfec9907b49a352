//! imoveis-service: REST backend for real-estate property listings over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{connect_pool, DbConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{Property, PropertyPayload};
pub use routes::{app, probe_routes, property_routes};
pub use service::PropertyService;
pub use state::AppState;
pub use store::{ensure_imoveis_table, PgPropertyStore, PropertyStore};

//! Process configuration read from the environment (after `dotenvy` has loaded `.env`).

pub mod db;
pub mod server;

pub use db::{connect_pool, DbConfig};
pub use server::ServerConfig;

use crate::error::ConfigError;

/// Environment lookup; swapped for a map in tests.
pub(crate) fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

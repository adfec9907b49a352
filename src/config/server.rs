//! HTTP listener settings.

use super::{env_var, parse_or};
use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub body_limit: usize,
}

impl ServerConfig {
    /// `BIND_ADDR` (default `0.0.0.0:3000`) and `BODY_LIMIT_BYTES` (default 64 KiB).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(ServerConfig {
            bind_addr: parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            body_limit: parse_or(&lookup, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT)?,
        })
    }
}

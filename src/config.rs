//! Server configuration read from the environment.
//!
//! | Variable                | Default        | Meaning                          |
//! |-------------------------|----------------|----------------------------------|
//! | `DATABASE_URL`          | required       | `PostgreSQL` connection URL      |
//! | `LYNKDESK_BIND_ADDR`    | `0.0.0.0:8080` | Socket address to listen on      |
//! | `LYNKDESK_DB_POOL_SIZE` | `5`            | Maximum pooled connections       |
//! | `LYNKDESK_API_KEY`      | unset          | Static bearer key for requests   |
//!
//! When `LYNKDESK_API_KEY` is unset, bearer validation is left to whatever
//! fronts the server.

use std::fmt;
use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable holding the database URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable holding the bind address.
pub const BIND_ADDR_VAR: &str = "LYNKDESK_BIND_ADDR";
/// Environment variable holding the pool size.
pub const POOL_SIZE_VAR: &str = "LYNKDESK_DB_POOL_SIZE";
/// Environment variable holding the static bearer key.
pub const API_KEY_VAR: &str = "LYNKDESK_API_KEY";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_SIZE: u32 = 5;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable has a value that cannot be used.
    #[error("invalid value '{value}' for {name}: {reason}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Typed server configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_addr: SocketAddr,
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
    /// Static bearer key required on requests, if any.
    pub api_key: Option<String>,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = read(DATABASE_URL_VAR).ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let raw_bind = read(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid {
                name: BIND_ADDR_VAR,
                value: raw_bind.clone(),
                reason: err.to_string(),
            })?;

        let pool_size = match read(POOL_SIZE_VAR) {
            None => DEFAULT_POOL_SIZE,
            Some(raw) => parse_pool_size(&raw)?,
        };

        let api_key = read(API_KEY_VAR).map(|key| key.trim().to_owned());

        Ok(Self {
            bind_addr,
            database_url,
            pool_size,
            api_key,
        })
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: POOL_SIZE_VAR,
        value: raw.to_owned(),
        reason,
    };
    let size = raw
        .trim()
        .parse::<u32>()
        .map_err(|err| invalid(err.to_string()))?;
    if size == 0 {
        return Err(invalid("must be at least 1".to_owned()));
    }
    Ok(size)
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &"<redacted>")
            .field("pool_size", &self.pool_size)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

//! Registry configuration.
//!
//! The connection token is reserved for a future persistence backend. The
//! registry stores it alongside the max-users hint and never interprets either.

use std::env;

use crate::error::ConfigError;

pub const DEFAULT_CONNECTION: &str = "memory";
pub const DEFAULT_MAX_USERS: usize = 1000;

const CONNECTION_VAR: &str = "USER_REGISTRY_URL";
const MAX_USERS_VAR: &str = "USER_REGISTRY_MAX_USERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    connection: String,
    max_users: usize,
}

impl RegistryConfig {
    pub fn new(connection: impl Into<String>) -> Self {
        Self {
            connection: connection.into(),
            max_users: DEFAULT_MAX_USERS,
        }
    }

    /// Sets the max-record-count hint.
    pub fn with_max_users(mut self, max_users: usize) -> Self {
        self.max_users = max_users;
        self
    }

    /// Reads `USER_REGISTRY_URL` and `USER_REGISTRY_MAX_USERS`, falling back to
    /// the defaults when a variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let connection =
            env::var(CONNECTION_VAR).unwrap_or_else(|_| DEFAULT_CONNECTION.to_string());
        let max_users = parse_max_users(env::var(MAX_USERS_VAR).ok().as_deref())?;
        Ok(Self::new(connection).with_max_users(max_users))
    }

    pub fn connection(&self) -> &str {
        &self.connection
    }

    pub fn max_users(&self) -> usize {
        self.max_users
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECTION)
    }
}

fn parse_max_users(raw: Option<&str>) -> Result<usize, ConfigError> {
    match raw {
        None => Ok(DEFAULT_MAX_USERS),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::InvalidMaxUsers {
                value: value.to_string(),
                reason: e.to_string(),
            }),
    }
}

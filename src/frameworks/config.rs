use std::{env, time::Duration};

// Runtime/server constants.

pub const PORT_VAR: &str = "PORT";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

// All API routes are nested under this prefix.
pub const API_VERSION_PREFIX: &str = "/v1";

// How long browsers may cache a CORS preflight result.
pub const CORS_MAX_AGE: Duration = Duration::from_secs(300);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT is not set in the environment")]
    MissingPort,
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

// Process configuration, resolved once at startup and passed down by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// An empty `PORT` counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(PORT_VAR).unwrap_or_default();
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::MissingPort);
        }

        let port = raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;

        Ok(Self { port })
    }
}

// Log output shape; anything other than `json` falls back to compact text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Compact,
        }
    }
}

//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::matrix::MatrixConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No API key and no fixture file
    #[error("GOOGLE_MAPS_API_KEY must be set (or ITINERARY_MOCK_FILE for offline mode)")]
    MissingApiKey,

    /// A variable was set but couldn't be parsed
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Where travel times come from.
#[derive(Debug, Clone)]
pub enum OracleSource {
    /// Live Distance Matrix API
    Live(MatrixConfig),
    /// Canned responses loaded from a JSON file
    Fixture(PathBuf),
}

/// Configuration for the itinerary server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Travel-time source
    pub oracle: OracleSource,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable              | Meaning                                  |
    /// |-----------------------|------------------------------------------|
    /// | `GOOGLE_MAPS_API_KEY` | Distance Matrix API key                  |
    /// | `MATRIX_BASE_URL`     | Override the API base URL                |
    /// | `MATRIX_TIMEOUT_SECS` | Request timeout                          |
    /// | `MATRIX_LANGUAGE`     | Language for formatted durations         |
    /// | `ITINERARY_MOCK_FILE` | Serve from a fixture file instead of API |
    /// | `ITINERARY_BIND_ADDR` | Listen address (default 127.0.0.1:3000)  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's
    /// value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let bind_raw = get("ITINERARY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "ITINERARY_BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        if let Some(path) = get("ITINERARY_MOCK_FILE") {
            return Ok(Self {
                bind_addr,
                oracle: OracleSource::Fixture(PathBuf::from(path)),
            });
        }

        let api_key = get("GOOGLE_MAPS_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let mut matrix = MatrixConfig::new(api_key);

        if let Some(url) = get("MATRIX_BASE_URL") {
            matrix = matrix.with_base_url(url);
        }

        if let Some(raw) = get("MATRIX_TIMEOUT_SECS") {
            let secs = raw.parse().map_err(|_| ConfigError::Invalid {
                name: "MATRIX_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
            matrix = matrix.with_timeout(secs);
        }

        if let Some(language) = get("MATRIX_LANGUAGE") {
            matrix = matrix.with_language(language);
        }

        Ok(Self {
            bind_addr,
            oracle: OracleSource::Live(matrix),
        })
    }
}

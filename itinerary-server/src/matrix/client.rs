//! Distance Matrix HTTP client.
//!
//! Provides async travel-time queries against the mapping provider's
//! Distance Matrix API. Handles authentication, concurrency limiting, and
//! conversion to oracle results.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::Timestamp;
use crate::planner::{TravelQueryResult, TravelTimeOracle};

use super::convert::convert_response;
use super::error::MatrixError;
use super::types::DistanceMatrixResponse;

/// Default base URL for the Distance Matrix API.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Travel mode sent with every query.
const TRAVEL_MODE: &str = "transit";

/// Configuration for the Distance Matrix client.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to the production endpoint)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Language for formatted durations (provider default if unset)
    pub language: Option<String>,
}

impl MatrixConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
            language: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the language for formatted durations, e.g. "en-GB".
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Distance Matrix API client.
///
/// Cheap to clone; clones share the connection pool and concurrency limit.
#[derive(Debug, Clone)]
pub struct DistanceMatrixClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: Option<String>,
    semaphore: Arc<Semaphore>,
}

impl DistanceMatrixClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MatrixConfig) -> Result<Self, MatrixError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            language: config.language,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Build the query parameters for a single origin/destination pair.
    fn query_params(
        &self,
        origin: &str,
        destination: &str,
        departure: Timestamp,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("origins", origin.to_string()),
            ("destinations", destination.to_string()),
            ("mode", TRAVEL_MODE.to_string()),
            ("departure_time", departure.epoch_secs().to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        params
    }

    /// Fetch the raw matrix response for one pair.
    pub async fn get_matrix(
        &self,
        origin: &str,
        destination: &str,
        departure: Timestamp,
    ) -> Result<DistanceMatrixResponse, MatrixError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| MatrixError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/json", self.base_url);

        debug!(origin, destination, departure = departure.epoch_secs(), "querying distance matrix");

        let response = self
            .http
            .get(&url)
            .query(&self.query_params(origin, destination, departure))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MatrixError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MatrixError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MatrixError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MatrixError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl TravelTimeOracle for DistanceMatrixClient {
    async fn query_travel_time(
        &self,
        origin: &str,
        destination: &str,
        departure: Timestamp,
    ) -> Result<TravelQueryResult, MatrixError> {
        let response = self.get_matrix(origin, destination, departure).await?;
        Ok(convert_response(&response))
    }
}

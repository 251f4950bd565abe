//! Distance Matrix client error types.
//!
//! These cover the cases where the provider could not be asked or its reply
//! could not be read. A well-formed reply carrying a failure status is not
//! an error at this layer.

/// Errors from the Distance Matrix HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by mapping provider")]
    RateLimited,

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Fixture data could not be loaded
    #[error("fixture error: {0}")]
    Fixture(String),
}

//! Distance Matrix API response DTOs.
//!
//! These types map directly to the provider's JSON responses. Fields the
//! provider omits on failure (rows, durations) are `Option` or defaulted.

use serde::{Deserialize, Serialize};

/// Response from the `distancematrix/json` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DistanceMatrixResponse {
    /// Top-level status ("OK", "INVALID_REQUEST", ...).
    pub status: String,

    /// Human-readable detail when status is not "OK".
    pub error_message: Option<String>,

    /// Origins as geocoded by the provider.
    #[serde(default)]
    pub origin_addresses: Vec<String>,

    /// Destinations as geocoded by the provider.
    #[serde(default)]
    pub destination_addresses: Vec<String>,

    /// One row per origin.
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

/// One row of the matrix: every destination for a single origin.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

/// A single origin/destination pair.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatrixElement {
    /// Element status ("OK", "NOT_FOUND", "ZERO_RESULTS", ...).
    pub status: String,

    /// Travel time. Absent unless status is "OK".
    pub duration: Option<TextValue>,

    /// Travel distance in metres.
    pub distance: Option<TextValue>,
}

/// A quantity with its provider-formatted text.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextValue {
    /// Formatted for display, e.g. "1 hour 30 mins".
    pub text: String,

    /// Raw value: seconds for durations, metres for distances.
    pub value: i64,
}

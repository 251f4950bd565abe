//! Mapping provider status codes.

use std::fmt;

use serde::{Serialize, Serializer};

/// A status code reported by the mapping provider, either for a whole query
/// or for a single origin/destination element.
///
/// Unrecognised codes are kept verbatim in [`QueryStatus::Other`] so they
/// can still be reported back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryStatus {
    Ok,
    NotFound,
    ZeroResults,
    MaxRouteLengthExceeded,
    InvalidRequest,
    MaxElementsExceeded,
    MaxDimensionsExceeded,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    Other(String),
}

impl QueryStatus {
    /// Parse a provider status string. Never fails.
    pub fn parse(s: &str) -> Self {
        match s {
            "OK" => QueryStatus::Ok,
            "NOT_FOUND" => QueryStatus::NotFound,
            "ZERO_RESULTS" => QueryStatus::ZeroResults,
            "MAX_ROUTE_LENGTH_EXCEEDED" => QueryStatus::MaxRouteLengthExceeded,
            "INVALID_REQUEST" => QueryStatus::InvalidRequest,
            "MAX_ELEMENTS_EXCEEDED" => QueryStatus::MaxElementsExceeded,
            "MAX_DIMENSIONS_EXCEEDED" => QueryStatus::MaxDimensionsExceeded,
            "OVER_DAILY_LIMIT" => QueryStatus::OverDailyLimit,
            "OVER_QUERY_LIMIT" => QueryStatus::OverQueryLimit,
            "REQUEST_DENIED" => QueryStatus::RequestDenied,
            "UNKNOWN_ERROR" => QueryStatus::UnknownError,
            other => QueryStatus::Other(other.to_string()),
        }
    }

    /// The provider's string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            QueryStatus::Ok => "OK",
            QueryStatus::NotFound => "NOT_FOUND",
            QueryStatus::ZeroResults => "ZERO_RESULTS",
            QueryStatus::MaxRouteLengthExceeded => "MAX_ROUTE_LENGTH_EXCEEDED",
            QueryStatus::InvalidRequest => "INVALID_REQUEST",
            QueryStatus::MaxElementsExceeded => "MAX_ELEMENTS_EXCEEDED",
            QueryStatus::MaxDimensionsExceeded => "MAX_DIMENSIONS_EXCEEDED",
            QueryStatus::OverDailyLimit => "OVER_DAILY_LIMIT",
            QueryStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            QueryStatus::RequestDenied => "REQUEST_DENIED",
            QueryStatus::UnknownError => "UNKNOWN_ERROR",
            QueryStatus::Other(s) => s,
        }
    }

    /// Whether this is the success code.
    pub fn is_ok(&self) -> bool {
        matches!(self, QueryStatus::Ok)
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for QueryStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

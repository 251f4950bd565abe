//! Itinerary planning errors.

use std::fmt;

use crate::domain::{QueryStatus, ValidationError};
use crate::matrix::MatrixError;

/// Which part of the provider's reply carried the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureLevel {
    /// The query as a whole was rejected, or the reply had no element.
    Provider,
    /// The element for the requested pair failed or had no duration.
    Element,
}

impl fmt::Display for FailureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureLevel::Provider => f.write_str("query"),
            FailureLevel::Element => f.write_str("route"),
        }
    }
}

/// Error from itinerary planning.
///
/// Every failure after validation names the segment it happened on.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The input was rejected before any provider call
    #[error("invalid itinerary: {0}")]
    Validation(#[from] ValidationError),

    /// The provider answered, but with a failure status or an incomplete reply
    #[error("segment {segment}: {level} failed with status {status}")]
    QueryFailure {
        segment: usize,
        status: QueryStatus,
        level: FailureLevel,
    },

    /// The provider couldn't be reached or its reply couldn't be read
    #[error("segment {segment}: mapping provider unavailable: {source}")]
    Transport {
        segment: usize,
        #[source]
        source: MatrixError,
    },

    /// Arrival or next departure falls outside the representable time range
    #[error("segment {segment}: time out of range")]
    TimeOutOfRange { segment: usize },

    /// Planning was cancelled before it finished
    #[error("cancelled before segment {segment} completed")]
    Cancelled { segment: usize },
}

impl PlanError {
    /// Index of the segment that failed, if the failure happened mid-chain.
    pub fn segment(&self) -> Option<usize> {
        match self {
            PlanError::Validation(_) => None,
            PlanError::QueryFailure { segment, .. }
            | PlanError::Transport { segment, .. }
            | PlanError::TimeOutOfRange { segment }
            | PlanError::Cancelled { segment } => Some(*segment),
        }
    }
}

//! The travel-time oracle seam.
//!
//! The planner never talks HTTP itself. It asks an oracle for the transit
//! time between two addresses at a given departure time and gets back a
//! [`TravelQueryResult`], which distinguishes a rejected query from a
//! per-element answer.

use std::future::Future;

use crate::domain::{QueryStatus, Timestamp};
use crate::matrix::MatrixError;

/// Travel time for one origin/destination pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelDuration {
    /// Whole seconds of travel.
    pub seconds: i64,

    /// Provider-formatted text, e.g. "1 hour 30 mins".
    pub text: String,
}

impl TravelDuration {
    pub fn new(seconds: i64, text: impl Into<String>) -> Self {
        Self {
            seconds,
            text: text.into(),
        }
    }
}

/// The oracle's answer to a single travel-time query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelQueryResult {
    /// The query as a whole failed, or the reply held no element to read.
    Rejected { status: QueryStatus },

    /// The reply held an element for the requested pair.
    Element {
        status: QueryStatus,
        duration: Option<TravelDuration>,
    },
}

impl TravelQueryResult {
    /// A successful answer.
    pub fn found(seconds: i64, text: impl Into<String>) -> Self {
        TravelQueryResult::Element {
            status: QueryStatus::Ok,
            duration: Some(TravelDuration::new(seconds, text)),
        }
    }

    /// An element-level failure with no duration.
    pub fn element_failed(status: QueryStatus) -> Self {
        TravelQueryResult::Element {
            status,
            duration: None,
        }
    }

    /// A query-level failure.
    pub fn rejected(status: QueryStatus) -> Self {
        TravelQueryResult::Rejected { status }
    }
}

/// Source of transit travel times.
///
/// Implemented by the Distance Matrix client and by fixture/stub oracles in
/// tests. Implementations must be safe to share across concurrent requests.
pub trait TravelTimeOracle: Send + Sync {
    /// Ask for the transit time from `origin` to `destination`, leaving at
    /// `departure`.
    ///
    /// Returns `Err` only when the provider couldn't be reached or its reply
    /// couldn't be read. Failure statuses come back as `Ok` results.
    fn query_travel_time(
        &self,
        origin: &str,
        destination: &str,
        departure: Timestamp,
    ) -> impl Future<Output = Result<TravelQueryResult, MatrixError>> + Send;
}

//! Conversion from Distance Matrix DTOs to oracle results.
//!
//! Each query asks for exactly one origin and one destination, so only the
//! first element of the first row is meaningful.

use tracing::debug;

use crate::domain::QueryStatus;
use crate::planner::{TravelDuration, TravelQueryResult};

use super::types::DistanceMatrixResponse;

/// Reduce a single-pair matrix response to a [`TravelQueryResult`].
pub fn convert_response(response: &DistanceMatrixResponse) -> TravelQueryResult {
    let status = QueryStatus::parse(&response.status);

    if !status.is_ok() {
        if let Some(message) = &response.error_message {
            debug!(%status, error_message = %message, "distance matrix query rejected");
        }
        return TravelQueryResult::Rejected { status };
    }

    let Some(element) = response.rows.first().and_then(|r| r.elements.first()) else {
        debug!("distance matrix reply has no rows or elements");
        return TravelQueryResult::Rejected { status };
    };

    TravelQueryResult::Element {
        status: QueryStatus::parse(&element.status),
        duration: element
            .duration
            .as_ref()
            .map(|d| TravelDuration::new(d.value, d.text.clone())),
    }
}

//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{ItineraryRequest, SegmentOutcome, ValidationError};

/// Request to plan an itinerary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItineraryRequest {
    /// Stops in visiting order
    pub addresses: Vec<StopRequest>,

    /// Departure from the first stop, Unix epoch seconds
    pub start_time: i64,
}

/// One stop in a plan request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopRequest {
    /// Free-form address
    pub address: String,

    /// Seconds to stay after arriving (defaults to 0)
    #[serde(default)]
    pub stay_duration: u32,
}

impl PlanItineraryRequest {
    /// Validate into a domain request.
    pub fn into_request(self) -> Result<ItineraryRequest, ValidationError> {
        ItineraryRequest::from_parts(
            self.addresses
                .into_iter()
                .map(|s| (s.address, s.stay_duration)),
            self.start_time,
        )
    }
}

/// Response for itinerary planning.
#[derive(Debug, Serialize)]
pub struct PlanItineraryResponse {
    /// One entry per consecutive pair of stops
    pub segments: Vec<SegmentOutcome>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

//! Per-segment results of an itinerary.

use serde::Serialize;

use super::status::QueryStatus;
use super::time::Timestamp;

/// The computed transit leg between two consecutive stops.
///
/// Serializes with camelCase keys, ISO-8601 timestamps, and `stayTime`
/// omitted when the destination has no stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentOutcome {
    /// Origin address as supplied by the caller.
    pub origin: String,

    /// Destination address as supplied by the caller.
    pub destination: String,

    /// Provider-formatted travel time, e.g. "1 hour 30 mins".
    #[serde(rename = "duration")]
    pub human_duration: String,

    /// Departure from the origin.
    pub start_time: Timestamp,

    /// Arrival at the destination.
    pub arrival_time: Timestamp,

    /// Seconds spent at the destination, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_time: Option<String>,

    /// Element status reported by the provider.
    pub status: QueryStatus,
}

impl SegmentOutcome {
    /// Travel time in seconds.
    pub fn transit_secs(&self) -> i64 {
        self.arrival_time.epoch_secs() - self.start_time.epoch_secs()
    }
}

/// Format a stay for display. A stay of zero is reported as no stay at all.
pub fn format_stay(stay_duration: u32) -> Option<String> {
    (stay_duration != 0).then(|| stay_duration.to_string())
}

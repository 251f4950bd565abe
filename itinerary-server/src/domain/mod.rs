//! Domain types for the itinerary planner.
//!
//! This module contains the core domain model types. All types enforce
//! their invariants at construction time, so code that receives these
//! types can trust their validity.

mod error;
mod segment;
mod status;
mod stop;
mod time;

pub use error::{MIN_STOPS, ValidationError};
pub use segment::{SegmentOutcome, format_stay};
pub use status::QueryStatus;
pub use stop::{AddressStop, ItineraryRequest, validate_stops};
pub use time::{Timestamp, TimestampOutOfRange};

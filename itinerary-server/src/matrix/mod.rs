//! Distance Matrix (mapping provider) client.
//!
//! This module provides an HTTP client for the mapping provider's Distance
//! Matrix API, which reports travel time between addresses.
//!
//! Key characteristics of the API:
//! - Departure times are Unix epoch seconds
//! - A reply has a top-level status plus one status per origin/destination
//!   element; a top-level "OK" says nothing about whether a route was found
//! - Durations come as whole seconds alongside display text

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DEFAULT_BASE_URL, DistanceMatrixClient, MatrixConfig};
pub use convert::convert_response;
pub use error::MatrixError;
pub use mock::{FixtureEntry, MockMatrixClient};
pub use types::{DistanceMatrixResponse, MatrixElement, MatrixRow, TextValue};

//! Itinerary planner.
//!
//! This module implements the core itinerary chaining algorithm that
//! answers: "if I visit these addresses in this order, staying this long at
//! each, when do I get where?"
//!
//! The planner queries a [`TravelTimeOracle`] once per consecutive pair of
//! stops, carrying each arrival (plus the stay) forward as the next
//! departure time.

mod chain;
mod error;
mod oracle;

pub use chain::Planner;
pub use error::{FailureLevel, PlanError};
pub use oracle::{TravelDuration, TravelQueryResult, TravelTimeOracle};

//! Web layer for the itinerary planner.
//!
//! Provides HTTP endpoints for planning itineraries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, OracleBackend};

//! Multi-stop transit itinerary planner.
//!
//! A web service that answers: "if I visit these addresses in order,
//! staying a while at each, when will I leave and arrive at every stop?"

pub mod config;
pub mod domain;
pub mod matrix;
pub mod planner;
pub mod web;

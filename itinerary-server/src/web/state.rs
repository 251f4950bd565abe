//! Application state for the web layer.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::domain::Timestamp;
use crate::matrix::{DistanceMatrixClient, MatrixError, MockMatrixClient};
use crate::planner::{TravelQueryResult, TravelTimeOracle};

/// The travel-time source the server plans against.
#[derive(Clone)]
pub enum OracleBackend {
    /// Live Distance Matrix API
    Live(DistanceMatrixClient),
    /// Canned responses from a fixture file
    Fixture(MockMatrixClient),
}

impl TravelTimeOracle for OracleBackend {
    async fn query_travel_time(
        &self,
        origin: &str,
        destination: &str,
        departure: Timestamp,
    ) -> Result<TravelQueryResult, MatrixError> {
        match self {
            OracleBackend::Live(client) => {
                client
                    .query_travel_time(origin, destination, departure)
                    .await
            }
            OracleBackend::Fixture(client) => {
                client
                    .query_travel_time(origin, destination, departure)
                    .await
            }
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Travel-time oracle shared by all requests
    pub oracle: Arc<OracleBackend>,
    /// Cancelled when the server begins shutting down
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Create a new app state.
    pub fn new(oracle: OracleBackend) -> Self {
        Self {
            oracle: Arc::new(oracle),
            shutdown: CancellationToken::new(),
        }
    }
}

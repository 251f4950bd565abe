//! Fixture-backed Distance Matrix client for running without API access.
//!
//! Loads canned provider responses from a JSON file and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{QueryStatus, Timestamp};
use crate::planner::{TravelQueryResult, TravelTimeOracle};

use super::convert::convert_response;
use super::error::MatrixError;
use super::types::DistanceMatrixResponse;

/// One canned response in a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureEntry {
    pub origin: String,
    pub destination: String,
    pub response: DistanceMatrixResponse,
}

type FixtureMap = HashMap<(String, String), DistanceMatrixResponse>;

/// Mock client that serves responses from a fixture file.
///
/// Departure times are ignored; fixture data is static. Pairs missing from
/// the fixture answer with a `NOT_FOUND` element.
#[derive(Clone)]
pub struct MockMatrixClient {
    responses: Arc<FixtureMap>,
}

impl MockMatrixClient {
    /// Load fixtures from a JSON file holding a list of [`FixtureEntry`].
    pub fn new(path: impl AsRef<Path>) -> Result<Self, MatrixError> {
        Ok(Self::from_entries(load_entries(path.as_ref())?))
    }

    /// Build a client from in-memory entries.
    pub fn from_entries(entries: impl IntoIterator<Item = FixtureEntry>) -> Self {
        Self {
            responses: Arc::new(build_map(entries)),
        }
    }

    /// Number of origin/destination pairs with canned responses.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Whether the fixture is empty.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

fn load_entries(path: &Path) -> Result<Vec<FixtureEntry>, MatrixError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| MatrixError::Fixture(format!("failed to read {}: {e}", path.display())))?;

    serde_json::from_str(&json)
        .map_err(|e| MatrixError::Fixture(format!("failed to parse {}: {e}", path.display())))
}

fn build_map(entries: impl IntoIterator<Item = FixtureEntry>) -> FixtureMap {
    entries
        .into_iter()
        .map(|e| ((e.origin, e.destination), e.response))
        .collect()
}

impl TravelTimeOracle for MockMatrixClient {
    async fn query_travel_time(
        &self,
        origin: &str,
        destination: &str,
        _departure: Timestamp,
    ) -> Result<TravelQueryResult, MatrixError> {
        let key = (origin.to_string(), destination.to_string());

        Ok(match self.responses.get(&key) {
            Some(response) => convert_response(response),
            None => TravelQueryResult::element_failed(QueryStatus::NotFound),
        })
    }
}

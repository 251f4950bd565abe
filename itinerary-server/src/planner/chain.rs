//! Itinerary chaining.
//!
//! Walks the stops in order, asking the oracle for each consecutive pair.
//! Each query's departure time is the previous segment's arrival plus the
//! stay at that stop, so segments are computed strictly one after another.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::domain::{
    AddressStop, ItineraryRequest, SegmentOutcome, Timestamp, format_stay, validate_stops,
};

use super::error::{FailureLevel, PlanError};
use super::oracle::{TravelQueryResult, TravelTimeOracle};

/// Itinerary planner over a travel-time oracle.
pub struct Planner<'a, O: TravelTimeOracle> {
    oracle: &'a O,
}

impl<'a, O: TravelTimeOracle> Planner<'a, O> {
    /// Create a new planner.
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    /// Plan a validated request.
    pub async fn plan(&self, request: &ItineraryRequest) -> Result<Vec<SegmentOutcome>, PlanError> {
        self.compute_itinerary(request.stops(), request.start_time()).await
    }

    /// Plan a validated request, giving up as soon as `token` is cancelled.
    ///
    /// Cancellation is reported as [`PlanError::Cancelled`] naming the
    /// segment that was in progress; no partial itinerary is returned.
    pub async fn plan_with_cancellation(
        &self,
        request: &ItineraryRequest,
        token: &CancellationToken,
    ) -> Result<Vec<SegmentOutcome>, PlanError> {
        self.chain(request.stops(), request.start_time(), Some(token)).await
    }

    /// Compute one outcome per consecutive pair of `stops`, leaving the
    /// first stop at `start_time`.
    ///
    /// Fails without calling the oracle if there are fewer than two stops.
    /// Any segment failure aborts the whole itinerary.
    pub async fn compute_itinerary(
        &self,
        stops: &[AddressStop],
        start_time: Timestamp,
    ) -> Result<Vec<SegmentOutcome>, PlanError> {
        self.chain(stops, start_time, None).await
    }

    async fn chain(
        &self,
        stops: &[AddressStop],
        start_time: Timestamp,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<SegmentOutcome>, PlanError> {
        validate_stops(stops)?;

        let segment_count = stops.len() - 1;
        let mut outcomes = Vec::with_capacity(segment_count);
        let mut departure = start_time;

        for (segment, pair) in stops.windows(2).enumerate() {
            let (origin, destination) = (&pair[0], &pair[1]);

            let outcome = match cancel {
                Some(token) => {
                    if token.is_cancelled() {
                        return Err(PlanError::Cancelled { segment });
                    }
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => return Err(PlanError::Cancelled { segment }),
                        result = self.compute_segment(segment, origin, destination, departure) => result?,
                    }
                }
                None => self.compute_segment(segment, origin, destination, departure).await?,
            };

            debug!(
                segment,
                origin = origin.address(),
                destination = destination.address(),
                departure = departure.epoch_secs(),
                arrival = outcome.arrival_time.epoch_secs(),
                transit = outcome.transit_secs(),
                "segment computed"
            );

            if segment + 1 < segment_count {
                let stay = i64::from(destination.stay_duration());
                departure = outcome
                    .arrival_time
                    .checked_add_secs(stay)
                    .map_err(|_| PlanError::TimeOutOfRange { segment })?;
            }

            outcomes.push(outcome);
        }

        info!(
            segments = outcomes.len(),
            start = start_time.epoch_secs(),
            "itinerary planned"
        );

        Ok(outcomes)
    }

    /// Compute the transit leg from `origin` to `destination`, leaving at
    /// `departure`. `segment` is only used to label errors.
    pub async fn compute_segment(
        &self,
        segment: usize,
        origin: &AddressStop,
        destination: &AddressStop,
        departure: Timestamp,
    ) -> Result<SegmentOutcome, PlanError> {
        let result = self
            .oracle
            .query_travel_time(origin.address(), destination.address(), departure)
            .await
            .map_err(|source| PlanError::Transport { segment, source })?;

        let (status, duration) = match result {
            TravelQueryResult::Rejected { status } => {
                return Err(PlanError::QueryFailure {
                    segment,
                    status,
                    level: FailureLevel::Provider,
                });
            }
            TravelQueryResult::Element {
                status,
                duration: Some(duration),
            } if status.is_ok() => (status, duration),
            TravelQueryResult::Element { status, .. } => {
                return Err(PlanError::QueryFailure {
                    segment,
                    status,
                    level: FailureLevel::Element,
                });
            }
        };

        let arrival_time = departure
            .checked_add_secs(duration.seconds)
            .map_err(|_| PlanError::TimeOutOfRange { segment })?;

        Ok(SegmentOutcome {
            origin: origin.address().to_string(),
            destination: destination.address().to_string(),
            human_duration: duration.text,
            start_time: departure,
            arrival_time,
            stay_time: format_stay(destination.stay_duration()),
            status,
        })
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;

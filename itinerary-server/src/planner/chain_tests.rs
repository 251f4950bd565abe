//! Unit tests for itinerary chaining.

use super::*;
use crate::domain::QueryStatus;
use crate::matrix::MatrixError;
use crate::planner::TravelTimeOracle;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

fn ts(secs: i64) -> Timestamp {
    Timestamp::from_epoch_secs(secs).unwrap()
}

fn stop(address: &str, stay: u32) -> AddressStop {
    AddressStop::new(address, stay).unwrap()
}

fn stops(data: &[(&str, u32)]) -> Vec<AddressStop> {
    data.iter().map(|(a, s)| stop(a, *s)).collect()
}

/// What the stub oracle does for a given pair.
#[derive(Clone)]
enum Answer {
    Result(TravelQueryResult),
    Unreachable,
    Hang,
}

/// Stub oracle with fixed answers per (origin, destination) that records
/// every query it receives.
struct StubOracle {
    answers: HashMap<(String, String), Answer>,
    queries: Mutex<Vec<(String, String, i64)>>,
}

impl StubOracle {
    fn new() -> Self {
        Self {
            answers: HashMap::new(),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn answer(mut self, origin: &str, destination: &str, answer: Answer) -> Self {
        self.answers
            .insert((origin.to_string(), destination.to_string()), answer);
        self
    }

    fn duration(self, origin: &str, destination: &str, secs: i64) -> Self {
        let text = format!("{} mins", secs / 60);
        self.answer(
            origin,
            destination,
            Answer::Result(TravelQueryResult::found(secs, text)),
        )
    }

    fn queries(&self) -> Vec<(String, String, i64)> {
        self.queries.lock().unwrap().clone()
    }

    fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl TravelTimeOracle for StubOracle {
    async fn query_travel_time(
        &self,
        origin: &str,
        destination: &str,
        departure: Timestamp,
    ) -> Result<TravelQueryResult, MatrixError> {
        self.queries.lock().unwrap().push((
            origin.to_string(),
            destination.to_string(),
            departure.epoch_secs(),
        ));

        let answer = self
            .answers
            .get(&(origin.to_string(), destination.to_string()))
            .cloned()
            .unwrap_or(Answer::Result(TravelQueryResult::element_failed(
                QueryStatus::NotFound,
            )));

        match answer {
            Answer::Result(r) => Ok(r),
            Answer::Unreachable => Err(MatrixError::Api {
                status: 503,
                message: "Service Unavailable".into(),
            }),
            Answer::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

#[tokio::test]
async fn worked_example_three_stops() {
    let oracle = StubOracle::new().duration("A", "B", 300).duration("B", "C", 200);
    let planner = Planner::new(&oracle);

    let result = planner
        .compute_itinerary(&stops(&[("A", 0), ("B", 600), ("C", 0)]), ts(1000))
        .await
        .unwrap();

    assert_eq!(result.len(), 2);

    assert_eq!(result[0].origin, "A");
    assert_eq!(result[0].destination, "B");
    assert_eq!(result[0].start_time, ts(1000));
    assert_eq!(result[0].arrival_time, ts(1300));
    assert_eq!(result[0].stay_time.as_deref(), Some("600"));
    assert_eq!(result[0].status, QueryStatus::Ok);
    assert_eq!(result[0].human_duration, "5 mins");

    assert_eq!(result[1].origin, "B");
    assert_eq!(result[1].destination, "C");
    assert_eq!(result[1].start_time, ts(1900));
    assert_eq!(result[1].arrival_time, ts(2100));
    assert_eq!(result[1].stay_time, None);

    assert_eq!(
        oracle.queries(),
        vec![
            ("A".to_string(), "B".to_string(), 1000),
            ("B".to_string(), "C".to_string(), 1900),
        ]
    );
}

#[tokio::test]
async fn single_stop_is_rejected_without_calls() {
    let oracle = StubOracle::new();
    let planner = Planner::new(&oracle);

    let err = planner
        .compute_itinerary(&stops(&[("X", 0)]), ts(0))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PlanError::Validation(crate::domain::ValidationError::TooFewStops {
            required: 2,
            actual: 1
        })
    ));
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn empty_stops_rejected_without_calls() {
    let oracle = StubOracle::new();
    let planner = Planner::new(&oracle);

    let err = planner.compute_itinerary(&[], ts(0)).await.unwrap_err();

    assert!(matches!(err, PlanError::Validation(_)));
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn top_level_zero_results_fails_segment_zero() {
    let oracle = StubOracle::new().answer(
        "A",
        "B",
        Answer::Result(TravelQueryResult::rejected(QueryStatus::ZeroResults)),
    );
    let planner = Planner::new(&oracle);

    let err = planner
        .compute_itinerary(&stops(&[("A", 0), ("B", 0)]), ts(0))
        .await
        .unwrap_err();

    match err {
        PlanError::QueryFailure {
            segment,
            status,
            level,
        } => {
            assert_eq!(segment, 0);
            assert_eq!(status, QueryStatus::ZeroResults);
            assert_eq!(level, FailureLevel::Provider);
        }
        other => panic!("expected QueryFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn element_failure_aborts_chain_at_that_segment() {
    let oracle = StubOracle::new()
        .duration("A", "B", 60)
        .answer(
            "B",
            "C",
            Answer::Result(TravelQueryResult::element_failed(QueryStatus::ZeroResults)),
        )
        .duration("C", "D", 60);
    let planner = Planner::new(&oracle);

    let err = planner
        .compute_itinerary(&stops(&[("A", 0), ("B", 0), ("C", 0), ("D", 0)]), ts(0))
        .await
        .unwrap_err();

    assert_eq!(err.segment(), Some(1));
    assert!(matches!(
        err,
        PlanError::QueryFailure {
            level: FailureLevel::Element,
            ..
        }
    ));
    // C -> D is never asked
    assert_eq!(oracle.call_count(), 2);
}

#[tokio::test]
async fn ok_element_without_duration_is_failure() {
    let oracle = StubOracle::new().answer(
        "A",
        "B",
        Answer::Result(TravelQueryResult::Element {
            status: QueryStatus::Ok,
            duration: None,
        }),
    );
    let planner = Planner::new(&oracle);

    let err = planner
        .compute_itinerary(&stops(&[("A", 0), ("B", 0)]), ts(0))
        .await
        .unwrap_err();

    match err {
        PlanError::QueryFailure { status, level, .. } => {
            assert_eq!(status, QueryStatus::Ok);
            assert_eq!(level, FailureLevel::Element);
        }
        other => panic!("expected QueryFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_error_is_distinct_from_query_failure() {
    let oracle = StubOracle::new()
        .duration("A", "B", 60)
        .answer("B", "C", Answer::Unreachable);
    let planner = Planner::new(&oracle);

    let err = planner
        .compute_itinerary(&stops(&[("A", 0), ("B", 0), ("C", 0)]), ts(0))
        .await
        .unwrap_err();

    assert!(matches!(err, PlanError::Transport { segment: 1, .. }));
}

#[tokio::test]
async fn arrival_overflow_is_time_out_of_range() {
    let oracle = StubOracle::new().duration("A", "B", i64::MAX);
    let planner = Planner::new(&oracle);

    let err = planner
        .compute_itinerary(&stops(&[("A", 0), ("B", 0)]), ts(1000))
        .await
        .unwrap_err();

    assert!(matches!(err, PlanError::TimeOutOfRange { segment: 0 }));
}

#[tokio::test]
async fn stay_at_first_stop_does_not_delay_start() {
    // The first stop's stay is never added: the trip starts at start_time.
    let oracle = StubOracle::new().duration("A", "B", 100);
    let planner = Planner::new(&oracle);

    let result = planner
        .compute_itinerary(&stops(&[("A", 9999), ("B", 0)]), ts(500))
        .await
        .unwrap();

    assert_eq!(result[0].start_time, ts(500));
    assert_eq!(result[0].arrival_time, ts(600));
}

#[tokio::test]
async fn stay_at_last_stop_is_reported() {
    let oracle = StubOracle::new().duration("A", "B", 100);
    let planner = Planner::new(&oracle);

    let result = planner
        .compute_itinerary(&stops(&[("A", 0), ("B", 45)]), ts(0))
        .await
        .unwrap();

    assert_eq!(result[0].stay_time.as_deref(), Some("45"));
}

#[tokio::test]
async fn revisiting_an_address_is_allowed() {
    let oracle = StubOracle::new().duration("A", "B", 100).duration("B", "A", 150);
    let planner = Planner::new(&oracle);

    let result = planner
        .compute_itinerary(&stops(&[("A", 0), ("B", 10), ("A", 0)]), ts(0))
        .await
        .unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[1].start_time, ts(110));
    assert_eq!(result[1].arrival_time, ts(260));
}

#[tokio::test]
async fn plan_uses_request_stops_and_start() {
    let oracle = StubOracle::new().duration("A", "B", 300).duration("B", "C", 200);
    let planner = Planner::new(&oracle);
    let request = ItineraryRequest::from_parts([("A", 0), ("B", 600), ("C", 0)], 1000).unwrap();

    let result = planner.plan(&request).await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[1].start_time, ts(1900));
}

#[tokio::test]
async fn repeated_runs_are_byte_identical() {
    let oracle = StubOracle::new().duration("A", "B", 300).duration("B", "C", 200);
    let planner = Planner::new(&oracle);
    let request = ItineraryRequest::from_parts([("A", 0), ("B", 600), ("C", 0)], 1000).unwrap();

    let first = serde_json::to_string(&planner.plan(&request).await.unwrap()).unwrap();
    let second = serde_json::to_string(&planner.plan(&request).await.unwrap()).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn cancelled_token_stops_before_any_call() {
    let oracle = StubOracle::new().duration("A", "B", 300);
    let planner = Planner::new(&oracle);
    let request = ItineraryRequest::from_parts([("A", 0), ("B", 0)], 0).unwrap();

    let token = CancellationToken::new();
    token.cancel();

    let err = planner
        .plan_with_cancellation(&request, &token)
        .await
        .unwrap_err();

    assert!(matches!(err, PlanError::Cancelled { segment: 0 }));
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn cancellation_mid_chain_returns_no_partial_result() {
    let oracle = StubOracle::new()
        .duration("A", "B", 300)
        .answer("B", "C", Answer::Hang);
    let planner = Planner::new(&oracle);
    let request = ItineraryRequest::from_parts([("A", 0), ("B", 0), ("C", 0)], 0).unwrap();

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let err = planner
        .plan_with_cancellation(&request, &token)
        .await
        .unwrap_err();

    assert!(matches!(err, PlanError::Cancelled { segment: 1 }));
    assert_eq!(oracle.call_count(), 2);
}

#[tokio::test]
async fn uncancelled_token_plans_normally() {
    let oracle = StubOracle::new().duration("A", "B", 300);
    let planner = Planner::new(&oracle);
    let request = ItineraryRequest::from_parts([("A", 0), ("B", 0)], 0).unwrap();

    let result = planner
        .plan_with_cancellation(&request, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Build a chain of stops named S0..Sn with the given stays, plus an
    /// oracle answering each consecutive pair with the given duration.
    fn build(stays: &[u32], durations: &[i64]) -> (Vec<AddressStop>, StubOracle) {
        let names: Vec<String> = (0..stays.len()).map(|i| format!("S{i}")).collect();
        let stops = names
            .iter()
            .zip(stays)
            .map(|(n, s)| stop(n, *s))
            .collect();

        let mut oracle = StubOracle::new();
        for (i, d) in durations.iter().enumerate() {
            oracle = oracle.duration(&names[i], &names[i + 1], *d);
        }
        (stops, oracle)
    }

    fn run<F: std::future::Future>(f: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f)
    }

    fn chain_inputs() -> impl Strategy<Value = (Vec<u32>, Vec<i64>, i64)> {
        (2usize..8).prop_flat_map(|n| {
            (
                prop::collection::vec(prop_oneof![Just(0u32), 0u32..10_000], n),
                prop::collection::vec(0i64..20_000, n - 1),
                0i64..2_000_000_000,
            )
        })
    }

    proptest! {
        #[test]
        fn one_call_and_one_outcome_per_segment((stays, durations, start) in chain_inputs()) {
            let (stops, oracle) = build(&stays, &durations);
            let planner = Planner::new(&oracle);

            let result = run(planner.compute_itinerary(&stops, ts(start))).unwrap();

            prop_assert_eq!(result.len(), stops.len() - 1);
            prop_assert_eq!(oracle.call_count(), stops.len() - 1);
            for (i, outcome) in result.iter().enumerate() {
                prop_assert_eq!(outcome.origin.clone(), format!("S{i}"));
                prop_assert_eq!(outcome.destination.clone(), format!("S{}", i + 1));
            }
        }

        #[test]
        fn departure_is_start_plus_prior_stays_and_durations((stays, durations, start) in chain_inputs()) {
            let (stops, oracle) = build(&stays, &durations);
            let planner = Planner::new(&oracle);

            run(planner.compute_itinerary(&stops, ts(start))).unwrap();

            let queries = oracle.queries();
            let mut expected = start;
            for (i, (_, _, departure)) in queries.iter().enumerate() {
                prop_assert_eq!(*departure, expected);
                expected += i64::from(stays[i + 1]) + durations[i];
            }
        }

        #[test]
        fn stay_time_present_iff_nonzero((stays, durations, start) in chain_inputs()) {
            let (stops, oracle) = build(&stays, &durations);
            let planner = Planner::new(&oracle);

            let result = run(planner.compute_itinerary(&stops, ts(start))).unwrap();

            for (i, outcome) in result.iter().enumerate() {
                let stay = stays[i + 1];
                if stay == 0 {
                    prop_assert!(outcome.stay_time.is_none());
                } else {
                    prop_assert_eq!(outcome.stay_time.clone(), Some(stay.to_string()));
                }
            }
        }

        #[test]
        fn failure_at_k_yields_no_results(
            (stays, durations, start) in chain_inputs(),
            k_seed in any::<prop::sample::Index>(),
        ) {
            let (stops, oracle) = build(&stays, &durations);
            let k = k_seed.index(durations.len());
            let oracle = oracle.answer(
                &format!("S{k}"),
                &format!("S{}", k + 1),
                Answer::Result(TravelQueryResult::element_failed(QueryStatus::NotFound)),
            );
            let planner = Planner::new(&oracle);

            let err = run(planner.compute_itinerary(&stops, ts(start))).unwrap_err();

            prop_assert_eq!(err.segment(), Some(k));
            prop_assert_eq!(oracle.call_count(), k + 1);
        }
    }
}

//! Domain error types.
//!
//! These errors represent validation failures on itinerary input. They are
//! always detected before the mapping provider is contacted.

/// Minimum number of stops an itinerary needs (one origin, one destination).
pub const MIN_STOPS: usize = 2;

/// Validation failures for itinerary input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Not enough stops to form a single segment
    #[error("at least {required} addresses are required, got {actual}")]
    TooFewStops { required: usize, actual: usize },

    /// A stop has a blank address
    #[error("address at position {index} is empty")]
    EmptyAddress { index: usize },

    /// The trip start time can't be represented as a calendar timestamp
    #[error("start time {0} is out of range")]
    StartTimeOutOfRange(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooFewStops {
            required: MIN_STOPS,
            actual: 1,
        };
        assert_eq!(err.to_string(), "at least 2 addresses are required, got 1");

        let err = ValidationError::EmptyAddress { index: 3 };
        assert_eq!(err.to_string(), "address at position 3 is empty");

        let err = ValidationError::StartTimeOutOfRange(i64::MAX);
        assert!(err.to_string().contains("out of range"));
    }
}

//! Itinerary stops and requests.

use super::error::{MIN_STOPS, ValidationError};
use super::time::Timestamp;

/// An address to visit, plus how long to stay there after arriving.
///
/// The address is guaranteed non-blank by construction.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::AddressStop;
///
/// let stop = AddressStop::new("10 Downing St, London", 600).unwrap();
/// assert_eq!(stop.address(), "10 Downing St, London");
/// assert_eq!(stop.stay_duration(), 600);
///
/// assert!(AddressStop::new("   ", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressStop {
    address: String,
    stay_duration: u32,
}

impl AddressStop {
    /// Create a stop. `stay_duration` is in seconds.
    pub fn new(address: impl Into<String>, stay_duration: u32) -> Result<Self, ValidationError> {
        Self::at_position(address, stay_duration, 0)
    }

    /// Create a stop, reporting `index` as its position if the address is blank.
    pub fn at_position(
        address: impl Into<String>,
        stay_duration: u32,
        index: usize,
    ) -> Result<Self, ValidationError> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(ValidationError::EmptyAddress { index });
        }
        Ok(Self {
            address,
            stay_duration,
        })
    }

    /// The address as given by the caller.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Seconds to remain at this stop before departing.
    pub fn stay_duration(&self) -> u32 {
        self.stay_duration
    }
}

/// A validated request to plan an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryRequest {
    stops: Vec<AddressStop>,
    start_time: Timestamp,
}

impl ItineraryRequest {
    /// Create a request, checking that there are enough stops.
    pub fn new(stops: Vec<AddressStop>, start_time: Timestamp) -> Result<Self, ValidationError> {
        validate_stops(&stops)?;
        Ok(Self { stops, start_time })
    }

    /// Create a request from raw `(address, stay)` pairs and epoch seconds.
    pub fn from_parts<I, S>(stops: I, start_epoch_secs: i64) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let start_time = Timestamp::from_epoch_secs(start_epoch_secs)
            .map_err(|_| ValidationError::StartTimeOutOfRange(start_epoch_secs))?;

        let stops = stops
            .into_iter()
            .enumerate()
            .map(|(i, (address, stay))| AddressStop::at_position(address, stay, i))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(stops, start_time)
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[AddressStop] {
        &self.stops
    }

    /// When the trip begins at the first stop.
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

/// Check that `stops` can form at least one segment and has no blank addresses.
pub fn validate_stops(stops: &[AddressStop]) -> Result<(), ValidationError> {
    if stops.len() < MIN_STOPS {
        return Err(ValidationError::TooFewStops {
            required: MIN_STOPS,
            actual: stops.len(),
        });
    }

    if let Some(index) = stops.iter().position(|s| s.address.trim().is_empty()) {
        return Err(ValidationError::EmptyAddress { index });
    }

    Ok(())
}

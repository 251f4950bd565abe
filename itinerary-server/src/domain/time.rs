//! Epoch-second timestamps.
//!
//! The mapping provider takes departure times as integer Unix seconds, and
//! every piece of itinerary arithmetic is done in whole seconds on those
//! integers. Rendering to ISO-8601 only happens at the edge.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Error returned when a timestamp cannot be represented as a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("timestamp {0} is outside the representable calendar range")]
pub struct TimestampOutOfRange(pub i64);

/// An instant, as whole seconds since the Unix epoch (UTC).
///
/// Construction via [`Timestamp::from_epoch_secs`] guarantees the value can
/// be rendered as a calendar timestamp, so [`Timestamp::to_iso8601`] never
/// fails.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Timestamp;
///
/// let t = Timestamp::from_epoch_secs(1000).unwrap();
/// assert_eq!(t.to_iso8601(), "1970-01-01T00:16:40+00:00");
///
/// let later = t.checked_add_secs(300).unwrap();
/// assert_eq!(later.epoch_secs(), 1300);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a timestamp from Unix seconds.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, TimestampOutOfRange> {
        DateTime::<Utc>::from_timestamp(secs, 0)
            .map(|_| Self(secs))
            .ok_or(TimestampOutOfRange(secs))
    }

    /// Seconds since the Unix epoch.
    pub fn epoch_secs(&self) -> i64 {
        self.0
    }

    /// Add a (possibly negative) number of seconds.
    ///
    /// Returns an error on integer overflow or if the result falls outside
    /// the calendar range.
    pub fn checked_add_secs(&self, secs: i64) -> Result<Self, TimestampOutOfRange> {
        let sum = self.0.checked_add(secs).ok_or(TimestampOutOfRange(self.0))?;
        Self::from_epoch_secs(sum)
    }

    fn as_datetime(&self) -> DateTime<Utc> {
        // Range was checked at construction
        DateTime::<Utc>::from_timestamp(self.0, 0).unwrap_or_default()
    }

    /// Render as an RFC 3339 timestamp with an explicit `+00:00` offset.
    pub fn to_iso8601(&self) -> String {
        self.as_datetime().to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

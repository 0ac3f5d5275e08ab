//! Flight timestamps.
//!
//! The catalog records departures and arrivals as local timestamps in
//! `YYYY-MM-DDTHH:MM:SS` form. This module wraps them in a type that only
//! admits that format and renders back to it unchanged.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Serialize, Serializer};

/// The one timestamp format accepted in the catalog and emitted in results.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS")]
pub struct TimeError {
    input: String,
}

/// A point in time at which a flight departs or arrives.
///
/// # Examples
///
/// ```
/// use trip_finder::domain::FlightTime;
///
/// let dep = FlightTime::parse("2021-09-01T10:30:00").unwrap();
/// let arr = FlightTime::parse("2021-09-01T12:45:00").unwrap();
///
/// assert!(dep < arr);
/// assert_eq!(arr.signed_duration_since(dep).num_minutes(), 135);
/// assert_eq!(dep.to_string(), "2021-09-01T10:30:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightTime(NaiveDateTime);

impl FlightTime {
    /// Parse a timestamp in `YYYY-MM-DDTHH:MM:SS` format.
    ///
    /// ```
    /// use trip_finder::domain::FlightTime;
    ///
    /// assert!(FlightTime::parse("2021-09-01T00:00:00").is_ok());
    ///
    /// // Other layouts are rejected
    /// assert!(FlightTime::parse("2021-09-01 10:30:00").is_err());
    /// assert!(FlightTime::parse("2021-09-01T10:30").is_err());
    /// assert!(FlightTime::parse("2021-13-01T10:30:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| TimeError {
                input: s.to_string(),
            })
    }

    /// Add a duration, returning `None` on overflow.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration).map(Self)
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }
}

#[cfg(test)]
impl std::ops::Add<Duration> for FlightTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).expect("time overflow")
    }
}

impl fmt::Debug for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightTime({})", self)
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for FlightTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

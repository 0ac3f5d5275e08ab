//! Airport code types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code {code:?}: {reason}")]
pub struct InvalidAirport {
    code: String,
    reason: &'static str,
}

/// A valid 3-letter airport code, as used in the flight catalog.
///
/// Codes are always 3 uppercase ASCII letters. This is a requirement on the
/// catalog format as well as on command-line arguments: a CSV row with any
/// other code is rejected at load time. Any `Airport` value is valid
/// by construction, and the type is `Copy` so itineraries can compare
/// endpoints without allocating.
///
/// # Examples
///
/// ```
/// use trip_finder::domain::Airport;
///
/// let wiw = Airport::parse("WIW").unwrap();
/// assert_eq!(wiw.as_str(), "WIW");
///
/// // Lowercase is rejected
/// assert!(Airport::parse("wiw").is_err());
///
/// // Wrong length is rejected
/// assert!(Airport::parse("WI").is_err());
/// assert!(Airport::parse("WIWX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Airport([u8; 3]);

impl Airport {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirport {
                code: s.to_string(),
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidAirport {
                code: s.to_string(),
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(Airport([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.as_str())
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Airport {
    type Err = InvalidAirport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Airport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

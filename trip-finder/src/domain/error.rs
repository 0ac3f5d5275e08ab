//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from catalog I/O errors.

use super::{Airport, FlightTime};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Invalid flight record (e.g., arrives before it departs)
    #[error("invalid flight {flight_no}: {reason}")]
    InvalidFlight {
        flight_no: String,
        reason: &'static str,
    },

    /// Consecutive flights don't share an airport
    #[error("airports {0} and {1} are not connected")]
    AirportsNotConnected(Airport, Airport),

    /// Inbound leg departs before the outbound leg lands
    #[error("return departs at {departure} before outbound arrival at {arrival}")]
    ReturnBeforeArrival {
        arrival: FlightTime,
        departure: FlightTime,
    },

    /// Itinerary has no flights
    #[error("itinerary must have at least one flight")]
    EmptyItinerary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidFlight {
            flight_no: "ZH214".into(),
            reason: "departure must be before arrival",
        };
        assert_eq!(
            err.to_string(),
            "invalid flight ZH214: departure must be before arrival"
        );

        let from = Airport::parse("WIW").unwrap();
        let to = Airport::parse("ECV").unwrap();
        let err = DomainError::AirportsNotConnected(from, to);
        assert_eq!(err.to_string(), "airports WIW and ECV are not connected");

        let err = DomainError::ReturnBeforeArrival {
            arrival: FlightTime::parse("2021-09-01T12:00:00").unwrap(),
            departure: FlightTime::parse("2021-09-01T11:00:00").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "return departs at 2021-09-01T11:00:00 before outbound arrival at 2021-09-01T12:00:00"
        );

        let err = DomainError::EmptyItinerary;
        assert_eq!(err.to_string(), "itinerary must have at least one flight");
    }
}

//! Flight records.

use chrono::Duration;
use serde::Serialize;

use super::{Airport, DomainError, FlightTime};

/// What a flight costs and how much luggage it takes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fare {
    /// Ticket price without luggage
    pub base_price: f64,
    /// Price per checked bag
    pub bag_price: f64,
    /// Maximum number of checked bags
    pub bags_allowed: u32,
}

impl Fare {
    pub fn new(base_price: f64, bag_price: f64, bags_allowed: u32) -> Self {
        Self {
            base_price,
            bag_price,
            bags_allowed,
        }
    }
}

/// A single scheduled flight from the catalog.
///
/// # Invariants
///
/// - Departure is strictly before arrival
/// - Prices are finite and non-negative
///
/// # Examples
///
/// ```
/// use trip_finder::domain::{Airport, Fare, Flight, FlightTime};
///
/// let flight = Flight::new(
///     "ZH214",
///     Airport::parse("WIW").unwrap(),
///     Airport::parse("RFZ").unwrap(),
///     FlightTime::parse("2021-09-01T23:20:00").unwrap(),
///     FlightTime::parse("2021-09-02T03:50:00").unwrap(),
///     Fare::new(168.0, 12.0, 2),
/// )
/// .unwrap();
///
/// assert_eq!(flight.duration().num_minutes(), 270);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    flight_no: String,
    origin: Airport,
    destination: Airport,
    departure: FlightTime,
    arrival: FlightTime,
    #[serde(flatten)]
    fare: Fare,
}

impl Flight {
    /// Constructs a validated flight.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the flight does not depart strictly before it
    /// arrives, or if either price is negative or not finite.
    pub fn new(
        flight_no: impl Into<String>,
        origin: Airport,
        destination: Airport,
        departure: FlightTime,
        arrival: FlightTime,
        fare: Fare,
    ) -> Result<Self, DomainError> {
        let flight_no = flight_no.into();

        if departure >= arrival {
            return Err(DomainError::InvalidFlight {
                flight_no,
                reason: "departure must be before arrival",
            });
        }

        for price in [fare.base_price, fare.bag_price] {
            if !price.is_finite() || price < 0.0 {
                return Err(DomainError::InvalidFlight {
                    flight_no,
                    reason: "prices must be non-negative numbers",
                });
            }
        }

        Ok(Self {
            flight_no,
            origin,
            destination,
            departure,
            arrival,
            fare,
        })
    }

    pub fn flight_no(&self) -> &str {
        &self.flight_no
    }

    pub fn origin(&self) -> Airport {
        self.origin
    }

    pub fn destination(&self) -> Airport {
        self.destination
    }

    pub fn departure(&self) -> FlightTime {
        self.departure
    }

    pub fn arrival(&self) -> FlightTime {
        self.arrival
    }

    pub fn base_price(&self) -> f64 {
        self.fare.base_price
    }

    pub fn bag_price(&self) -> f64 {
        self.fare.bag_price
    }

    pub fn bags_allowed(&self) -> u32 {
        self.fare.bags_allowed
    }

    /// Time in the air.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Ground time between this flight landing and `next` taking off.
    ///
    /// Negative if `next` leaves before this flight arrives.
    pub fn layover_before(&self, next: &Flight) -> Duration {
        next.departure.signed_duration_since(self.arrival)
    }
}

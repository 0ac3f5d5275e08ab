//! Itinerary types.
//!
//! An `Itinerary` is a one-way chain of connecting flights. A `Trip` pairs
//! an outbound itinerary with an inbound one to form a round trip. Both
//! expose their flights through the `Route` trait, which is what the
//! result compiler aggregates over.

use std::sync::Arc;

use chrono::Duration;

use super::{Airport, DomainError, Flight, FlightTime};

/// An ordered, non-empty sequence of flights that can be priced as a unit.
///
/// Implementors guarantee `flights()` is never empty.
pub trait Route {
    /// All flights in travel order.
    fn flights(&self) -> &[Arc<Flight>];

    /// The first flight.
    fn first_flight(&self) -> &Flight {
        &self.flights()[0]
    }

    /// The last flight.
    fn last_flight(&self) -> &Flight {
        let flights = self.flights();
        &flights[flights.len() - 1]
    }

    /// Departure time of the first flight.
    fn departure_time(&self) -> FlightTime {
        self.first_flight().departure()
    }

    /// Arrival time of the last flight.
    fn arrival_time(&self) -> FlightTime {
        self.last_flight().arrival()
    }

    /// Elapsed time from first departure to last arrival, ground time included.
    fn travel_time(&self) -> Duration {
        self.arrival_time()
            .signed_duration_since(self.departure_time())
    }

    /// Sum of base ticket prices.
    fn total_base_price(&self) -> f64 {
        self.flights().iter().map(|f| f.base_price()).sum()
    }

    /// Sum of per-bag prices, i.e. the cost of carrying one bag all the way.
    fn total_bag_price(&self) -> f64 {
        self.flights().iter().map(|f| f.bag_price()).sum()
    }

    /// The tightest bag allowance of any flight.
    ///
    /// A passenger can only check as many bags as every leg accepts.
    fn bags_allowed(&self) -> u32 {
        self.flights()
            .iter()
            .map(|f| f.bags_allowed())
            .min()
            .unwrap_or(0)
    }
}

/// A one-way chain of connecting flights.
///
/// # Invariants
///
/// - At least one flight
/// - Consecutive flights connect (destination of one = origin of next)
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    flights: Vec<Arc<Flight>>,
}

impl Itinerary {
    /// Constructs an itinerary from flights in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Flights list is empty
    /// - Flights don't connect (destination != next origin)
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use trip_finder::domain::{Airport, Fare, Flight, FlightTime, Itinerary, Route};
    ///
    /// let wiw = Airport::parse("WIW").unwrap();
    /// let rfz = Airport::parse("RFZ").unwrap();
    /// let flight = Flight::new(
    ///     "ZH214",
    ///     wiw,
    ///     rfz,
    ///     FlightTime::parse("2021-09-01T10:00:00").unwrap(),
    ///     FlightTime::parse("2021-09-01T12:00:00").unwrap(),
    ///     Fare::new(168.0, 12.0, 2),
    /// )
    /// .unwrap();
    ///
    /// let itinerary = Itinerary::new(vec![Arc::new(flight)]).unwrap();
    /// assert_eq!(itinerary.origin(), wiw);
    /// assert_eq!(itinerary.destination(), rfz);
    /// assert_eq!(itinerary.stop_count(), 0);
    /// assert_eq!(itinerary.total_base_price(), 168.0);
    /// ```
    pub fn new(flights: Vec<Arc<Flight>>) -> Result<Self, DomainError> {
        if flights.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        check_connected(&flights)?;

        Ok(Itinerary { flights })
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> Airport {
        self.first_flight().origin()
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> Airport {
        self.last_flight().destination()
    }

    /// Returns the number of flights.
    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    /// Returns the number of intermediate stops (flights - 1).
    pub fn stop_count(&self) -> usize {
        self.flights.len() - 1
    }

    /// Returns true if this is a direct flight.
    pub fn is_direct(&self) -> bool {
        self.flights.len() == 1
    }
}

impl Route for Itinerary {
    fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }
}

/// An outbound itinerary followed by an inbound one.
///
/// # Invariants
///
/// - The inbound itinerary starts where the outbound one ends
/// - The inbound itinerary departs no earlier than the outbound one arrives
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    flights: Vec<Arc<Flight>>,
    outbound_len: usize,
}

impl Trip {
    /// Pair an outbound and an inbound itinerary.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the inbound leg doesn't start at the outbound
    /// destination, or departs before the outbound leg arrives.
    pub fn new(outbound: &Itinerary, inbound: &Itinerary) -> Result<Self, DomainError> {
        if outbound.destination() != inbound.origin() {
            return Err(DomainError::AirportsNotConnected(
                outbound.destination(),
                inbound.origin(),
            ));
        }

        if outbound.arrival_time() > inbound.departure_time() {
            return Err(DomainError::ReturnBeforeArrival {
                arrival: outbound.arrival_time(),
                departure: inbound.departure_time(),
            });
        }

        let mut flights = Vec::with_capacity(outbound.flight_count() + inbound.flight_count());
        flights.extend(outbound.flights.iter().cloned());
        flights.extend(inbound.flights.iter().cloned());

        Ok(Trip {
            flights,
            outbound_len: outbound.flight_count(),
        })
    }

    /// Flights on the way out.
    pub fn outbound(&self) -> &[Arc<Flight>] {
        &self.flights[..self.outbound_len]
    }

    /// Flights on the way back.
    pub fn inbound(&self) -> &[Arc<Flight>] {
        &self.flights[self.outbound_len..]
    }

    /// Ground time at the turnaround airport.
    pub fn stay(&self) -> Duration {
        let landed = self.flights[self.outbound_len - 1].arrival();
        let leaves = self.flights[self.outbound_len].departure();
        leaves.signed_duration_since(landed)
    }
}

impl Route for Trip {
    fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }
}

fn check_connected(flights: &[Arc<Flight>]) -> Result<(), DomainError> {
    for window in flights.windows(2) {
        let prev_dest = window[0].destination();
        let next_origin = window[1].origin();
        if prev_dest != next_origin {
            return Err(DomainError::AirportsNotConnected(prev_dest, next_origin));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Fare;

    fn airport(s: &str) -> Airport {
        Airport::parse(s).unwrap()
    }

    fn time(s: &str) -> FlightTime {
        FlightTime::parse(&format!("2021-09-01T{s}:00")).unwrap()
    }

    fn make_flight(
        no: &str,
        from: &str,
        to: &str,
        dep: &str,
        arr: &str,
        fare: Fare,
    ) -> Arc<Flight> {
        Arc::new(
            Flight::new(no, airport(from), airport(to), time(dep), time(arr), fare).unwrap(),
        )
    }

    fn cheap() -> Fare {
        Fare::new(100.0, 10.0, 2)
    }

    #[test]
    fn itinerary_single_flight() {
        let f = make_flight("A1", "WIW", "RFZ", "10:00", "12:00", cheap());
        let itinerary = Itinerary::new(vec![f]).unwrap();

        assert_eq!(itinerary.flight_count(), 1);
        assert_eq!(itinerary.stop_count(), 0);
        assert!(itinerary.is_direct());
        assert_eq!(itinerary.origin(), airport("WIW"));
        assert_eq!(itinerary.destination(), airport("RFZ"));
        assert_eq!(itinerary.departure_time(), time("10:00"));
        assert_eq!(itinerary.arrival_time(), time("12:00"));
        assert_eq!(itinerary.travel_time(), Duration::hours(2));
    }

    #[test]
    fn itinerary_with_connection() {
        let f1 = make_flight("A1", "WIW", "ECV", "08:00", "10:00", Fare::new(50.0, 5.0, 2));
        let f2 = make_flight("A2", "ECV", "RFZ", "11:30", "13:00", Fare::new(70.0, 8.0, 1));
        let itinerary = Itinerary::new(vec![f1, f2]).unwrap();

        assert_eq!(itinerary.stop_count(), 1);
        assert!(!itinerary.is_direct());
        assert_eq!(itinerary.destination(), airport("RFZ"));
        assert_eq!(itinerary.travel_time(), Duration::hours(5));
        assert_eq!(itinerary.total_base_price(), 120.0);
        assert_eq!(itinerary.total_bag_price(), 13.0);
        assert_eq!(itinerary.bags_allowed(), 1);
    }

    #[test]
    fn bag_allowance_is_not_capped() {
        let f1 = make_flight("A1", "WIW", "ECV", "08:00", "10:00", Fare::new(50.0, 5.0, 150));
        let f2 = make_flight("A2", "ECV", "RFZ", "11:30", "13:00", Fare::new(70.0, 8.0, 120));
        let itinerary = Itinerary::new(vec![f1, f2]).unwrap();

        assert_eq!(itinerary.bags_allowed(), 120);
    }

    #[test]
    fn itinerary_rejects_empty() {
        assert_eq!(Itinerary::new(vec![]), Err(DomainError::EmptyItinerary));
    }

    #[test]
    fn itinerary_rejects_gap() {
        let f1 = make_flight("A1", "WIW", "ECV", "08:00", "10:00", cheap());
        let f2 = make_flight("A2", "NIZ", "RFZ", "11:30", "13:00", cheap());

        let err = Itinerary::new(vec![f1, f2]).unwrap_err();
        assert_eq!(
            err,
            DomainError::AirportsNotConnected(airport("ECV"), airport("NIZ"))
        );
    }

    #[test]
    fn trip_concatenates_legs() {
        let out = Itinerary::new(vec![make_flight(
            "O1", "WIW", "RFZ", "08:00", "10:00", cheap(),
        )])
        .unwrap();
        let back = Itinerary::new(vec![make_flight(
            "I1", "RFZ", "WIW", "15:00", "17:00", cheap(),
        )])
        .unwrap();

        let trip = Trip::new(&out, &back).unwrap();

        assert_eq!(trip.flights().len(), 2);
        assert_eq!(trip.outbound()[0].flight_no(), "O1");
        assert_eq!(trip.inbound()[0].flight_no(), "I1");
        assert_eq!(trip.stay(), Duration::hours(5));
        assert_eq!(trip.travel_time(), Duration::hours(9));
        assert_eq!(trip.total_base_price(), 200.0);
    }

    #[test]
    fn trip_allows_immediate_return() {
        let out = Itinerary::new(vec![make_flight(
            "O1", "WIW", "RFZ", "08:00", "10:00", cheap(),
        )])
        .unwrap();
        let back = Itinerary::new(vec![make_flight(
            "I1", "RFZ", "WIW", "10:00", "12:00", cheap(),
        )])
        .unwrap();

        assert!(Trip::new(&out, &back).is_ok());
    }

    #[test]
    fn trip_rejects_return_before_arrival() {
        let out = Itinerary::new(vec![make_flight(
            "O1", "WIW", "RFZ", "10:00", "12:00", cheap(),
        )])
        .unwrap();
        let back = Itinerary::new(vec![make_flight(
            "I1", "RFZ", "WIW", "11:00", "13:00", cheap(),
        )])
        .unwrap();

        assert!(matches!(
            Trip::new(&out, &back),
            Err(DomainError::ReturnBeforeArrival { .. })
        ));
    }

    #[test]
    fn trip_rejects_mismatched_turnaround() {
        let out = Itinerary::new(vec![make_flight(
            "O1", "WIW", "RFZ", "08:00", "10:00", cheap(),
        )])
        .unwrap();
        let back = Itinerary::new(vec![make_flight(
            "I1", "ECV", "WIW", "15:00", "17:00", cheap(),
        )])
        .unwrap();

        assert!(matches!(
            Trip::new(&out, &back),
            Err(DomainError::AirportsNotConnected(_, _))
        ));
    }
}

//! Pricing, filtering and ranking of search results.
//!
//! Turns raw itineraries (or round trips) into priced results, drops the
//! ones that can't carry the passenger's bags, and orders the rest
//! cheapest first.

use std::sync::Arc;

use chrono::Duration;

use super::search::SearchRequest;
use crate::domain::{Airport, Flight, Route};

/// A priced itinerary or round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripResult {
    /// All flights in travel order, return legs included.
    pub flights: Vec<Arc<Flight>>,

    /// The tightest per-flight bag allowance.
    pub bags_allowed: u32,

    /// Bags the passenger is bringing.
    pub bags_count: u32,

    /// Requested origin.
    pub origin: Airport,

    /// Requested destination.
    pub destination: Airport,

    /// Sum of base fares.
    pub total_base_price: f64,

    /// Sum of per-bag prices.
    pub total_bag_price: f64,

    /// Base fares plus bag fees for every bag on every flight.
    pub total_price: f64,

    /// First departure to last arrival.
    pub travel_time: Duration,
}

impl TripResult {
    /// Price a route for a passenger with `bags` bags.
    pub fn from_route<R: Route>(route: &R, request: &SearchRequest, bags: u32) -> Self {
        let total_base_price = route.total_base_price();
        let total_bag_price = route.total_bag_price();

        Self {
            flights: route.flights().to_vec(),
            bags_allowed: route.bags_allowed(),
            bags_count: bags,
            origin: request.origin,
            destination: request.destination,
            total_base_price,
            total_bag_price,
            total_price: total_base_price + f64::from(bags) * total_bag_price,
            travel_time: route.travel_time(),
        }
    }

    /// Returns true if every flight accepts the passenger's bags.
    pub fn fits_bags(&self) -> bool {
        self.bags_count <= self.bags_allowed
    }
}

/// Price, filter and rank routes.
///
/// Routes whose tightest bag allowance is below `bags` are dropped.
/// Survivors are returned cheapest first; equal prices keep their
/// input order.
pub fn compile_results<R: Route>(
    routes: &[R],
    request: &SearchRequest,
    bags: u32,
) -> Vec<TripResult> {
    let results = routes
        .iter()
        .map(|route| TripResult::from_route(route, request, bags))
        .filter(TripResult::fits_bags)
        .collect();

    rank_results(results)
}

/// Sort results by total price, cheapest first.
///
/// The sort is stable, so ties stay in the order they were found.
pub fn rank_results(mut results: Vec<TripResult>) -> Vec<TripResult> {
    results.sort_by(|a, b| a.total_price.total_cmp(&b.total_price));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fare, FlightTime, Itinerary};

    fn airport(s: &str) -> Airport {
        Airport::parse(s).unwrap()
    }

    fn time(s: &str) -> FlightTime {
        FlightTime::parse(&format!("2021-09-01T{s}:00")).unwrap()
    }

    fn request() -> SearchRequest {
        SearchRequest::new(airport("AAA"), airport("CCC"))
    }

    fn make_flight(no: &str, from: &str, to: &str, dep: &str, arr: &str, fare: Fare) -> Arc<Flight> {
        Arc::new(
            Flight::new(no, airport(from), airport(to), time(dep), time(arr), fare).unwrap(),
        )
    }

    fn direct(no: &str, fare: Fare) -> Itinerary {
        Itinerary::new(vec![make_flight(no, "AAA", "CCC", "08:00", "10:00", fare)]).unwrap()
    }

    fn numbers(results: &[TripResult]) -> Vec<&str> {
        results.iter().map(|r| r.flights[0].flight_no()).collect()
    }

    #[test]
    fn prices_connection() {
        let itinerary = Itinerary::new(vec![
            make_flight("F1", "AAA", "BBB", "06:00", "08:00", Fare::new(50.0, 5.0, 3)),
            make_flight("F2", "BBB", "CCC", "09:30", "11:00", Fare::new(70.0, 8.0, 2)),
        ])
        .unwrap();

        let result = TripResult::from_route(&itinerary, &request(), 2);

        assert_eq!(result.total_base_price, 120.0);
        assert_eq!(result.total_bag_price, 13.0);
        assert_eq!(result.total_price, 146.0);
        assert_eq!(result.bags_allowed, 2);
        assert_eq!(result.bags_count, 2);
        assert_eq!(result.travel_time, Duration::hours(5));
        assert_eq!(result.origin, airport("AAA"));
        assert_eq!(result.destination, airport("CCC"));
        assert!(result.fits_bags());
    }

    #[test]
    fn zero_bags_costs_base_price() {
        let result = TripResult::from_route(&direct("F1", Fare::new(99.0, 20.0, 0)), &request(), 0);

        assert_eq!(result.total_price, 99.0);
        assert!(result.fits_bags());
    }

    #[test]
    fn drops_routes_that_cannot_take_the_bags() {
        let routes = [
            direct("NONE", Fare::new(10.0, 1.0, 0)),
            direct("ONE", Fare::new(20.0, 1.0, 1)),
            direct("TWO", Fare::new(30.0, 1.0, 2)),
        ];

        let results = compile_results(&routes, &request(), 1);

        assert_eq!(numbers(&results), ["ONE", "TWO"]);
    }

    #[test]
    fn binding_allowance_is_the_tightest_leg() {
        let itinerary = Itinerary::new(vec![
            make_flight("F1", "AAA", "BBB", "06:00", "08:00", Fare::new(50.0, 5.0, 2)),
            make_flight("F2", "BBB", "CCC", "09:30", "11:00", Fare::new(70.0, 8.0, 0)),
        ])
        .unwrap();

        assert!(compile_results(&[itinerary], &request(), 1).is_empty());
    }

    #[test]
    fn sorts_by_total_price_including_bags() {
        // Cheaper base fare, but bag fees make it the most expensive
        let routes = [
            direct("BAG_HEAVY", Fare::new(10.0, 100.0, 2)),
            direct("MID", Fare::new(50.0, 5.0, 2)),
            direct("CHEAP", Fare::new(40.0, 5.0, 2)),
        ];

        let results = compile_results(&routes, &request(), 1);

        assert_eq!(numbers(&results), ["CHEAP", "MID", "BAG_HEAVY"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let routes = [
            direct("FIRST", Fare::new(50.0, 0.0, 1)),
            direct("CHEAPER", Fare::new(20.0, 0.0, 1)),
            direct("SECOND", Fare::new(50.0, 0.0, 1)),
            direct("THIRD", Fare::new(50.0, 0.0, 1)),
        ];

        let results = compile_results(&routes, &request(), 0);

        assert_eq!(numbers(&results), ["CHEAPER", "FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn no_routes_no_results() {
        let routes: [Itinerary; 0] = [];
        assert!(compile_results(&routes, &request(), 0).is_empty());
    }
}

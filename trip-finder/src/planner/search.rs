//! Depth-first itinerary search.
//!
//! Enumerates every chain of connecting flights from an origin to a
//! destination, walking the catalog in file order. A partial itinerary is
//! extended only while it has stops to spare, only by flights whose layover
//! falls inside the configured window, and never by a flight that returns
//! to the search origin. Once a chain reaches the destination it is
//! recorded and not extended further.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::domain::{Airport, Flight, Itinerary, Route};

use super::config::SearchConfig;
use super::rank::{TripResult, compile_results};
use super::round_trip::match_return_trips;

/// Error from trip search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Request for trip search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Where the passenger starts (and, for a round trip, returns to).
    pub origin: Airport,

    /// Where the passenger wants to go.
    pub destination: Airport,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: Airport, destination: Airport) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Validate the search request against the configuration it will run with.
    pub fn validate(&self, config: &SearchConfig) -> Result<(), SearchError> {
        if config.min_layover_mins < 0 {
            return Err(SearchError::InvalidRequest(
                "minimum layover cannot be negative".to_string(),
            ));
        }

        if config.min_layover_mins > config.max_layover_mins {
            return Err(SearchError::InvalidRequest(format!(
                "layover window is empty ({} > {} minutes)",
                config.min_layover_mins, config.max_layover_mins
            )));
        }

        Ok(())
    }
}

/// Find every itinerary from `origin` to `destination`.
///
/// Results come out in depth-first order over catalog positions: all
/// itineraries starting with the first eligible flight, then those starting
/// with the second, and so on. No itinerary is a prefix of another, because
/// chains stop as soon as they reach `destination`.
///
/// An empty result is not an error.
pub fn find_itineraries(
    catalog: &Catalog,
    origin: Airport,
    destination: Airport,
    config: &SearchConfig,
) -> Vec<Itinerary> {
    let search = Search {
        catalog,
        origin,
        destination,
        config,
    };

    let mut found = Vec::new();
    for first in catalog.departures_from(origin) {
        search.extend(vec![Arc::clone(first)], &mut found);
    }

    debug!(
        %origin,
        %destination,
        max_stops = config.max_stops,
        itineraries = found.len(),
        "itinerary search finished"
    );

    found
}

/// Fixed parameters of one search, shared by every recursive step.
struct Search<'a> {
    catalog: &'a Catalog,
    origin: Airport,
    destination: Airport,
    config: &'a SearchConfig,
}

impl Search<'_> {
    /// Record `path` if it is complete, otherwise try every onward flight.
    ///
    /// Each call owns its own snapshot of the partial itinerary.
    fn extend(&self, path: Vec<Arc<Flight>>, found: &mut Vec<Itinerary>) {
        let Some(last) = path.last() else {
            return;
        };

        if last.destination() == self.destination {
            if let Ok(itinerary) = Itinerary::new(path) {
                trace!(
                    flights = itinerary.flight_count(),
                    departure = %itinerary.departure_time(),
                    "recorded itinerary"
                );
                found.push(itinerary);
            }
            return;
        }

        // Already at the stop limit
        if path.len() > self.config.max_stops {
            return;
        }

        for next in self.catalog.departures_from(last.destination()) {
            if !self.is_valid_connection(last, next) {
                continue;
            }

            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend(path.iter().cloned());
            extended.push(Arc::clone(next));
            self.extend(extended, found);
        }
    }

    fn is_valid_connection(&self, previous: &Flight, next: &Flight) -> bool {
        next.destination() != self.origin && self.config.layover_ok(previous.layover_before(next))
    }
}

/// Trip planner: runs the searches, pairs round trips and ranks results.
pub struct Planner<'a> {
    catalog: &'a Catalog,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(catalog: &'a Catalog, config: &'a SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// Plan trips for a request, cheapest first.
    ///
    /// One-way requests search once. Round trips search both directions and
    /// keep only pairs where the return leaves after the outbound lands.
    pub fn plan(&self, request: &SearchRequest) -> Result<Vec<TripResult>, SearchError> {
        request.validate(self.config)?;

        let outbound = find_itineraries(
            self.catalog,
            request.origin,
            request.destination,
            self.config,
        );

        let results = if self.config.round_trip {
            let inbound = find_itineraries(
                self.catalog,
                request.destination,
                request.origin,
                self.config,
            );
            let trips = match_return_trips(&outbound, &inbound);
            debug!(
                outbound = outbound.len(),
                inbound = inbound.len(),
                trips = trips.len(),
                "paired return trips"
            );
            compile_results(&trips, request, self.config.bags)
        } else {
            compile_results(&outbound, request, self.config.bags)
        };

        Ok(results)
    }
}


#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

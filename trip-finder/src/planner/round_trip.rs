//! Pairing outbound and inbound itineraries into round trips.

use crate::domain::{Itinerary, Trip};

/// Combine every outbound itinerary with every inbound one it can connect to.
///
/// A pair qualifies when the inbound itinerary starts where the outbound one
/// ends and departs no earlier than the outbound one arrives. There is no
/// minimum stay. Output is outbound-major: all pairs for the first outbound
/// itinerary, then the second, and so on.
pub fn match_return_trips(outbound: &[Itinerary], inbound: &[Itinerary]) -> Vec<Trip> {
    outbound
        .iter()
        .flat_map(|out| inbound.iter().filter_map(move |back| Trip::new(out, back).ok()))
        .collect()
}

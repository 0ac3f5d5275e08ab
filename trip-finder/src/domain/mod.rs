//! Domain types for the trip finder.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod airport;
mod error;
mod flight;
mod itinerary;
mod time;

pub use airport::{Airport, InvalidAirport};
pub use error::DomainError;
pub use flight::{Fare, Flight};
pub use itinerary::{Itinerary, Route, Trip};
pub use time::{FlightTime, TIMESTAMP_FORMAT, TimeError};

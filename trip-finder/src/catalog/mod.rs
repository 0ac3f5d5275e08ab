//! The flight catalog.
//!
//! Holds every known flight in file order. Search iterates the catalog in
//! that order, so the order in which flights were loaded determines the
//! order in which equally-priced results are reported.

mod error;
mod loader;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{Airport, Flight};

pub use error::CatalogError;

/// An immutable, ordered collection of flights.
///
/// Flights are stored behind `Arc` so itineraries can hold them without
/// copying records around. The catalog can be shared freely between
/// searches.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    flights: Vec<Arc<Flight>>,
}

impl Catalog {
    /// Build a catalog from flights, keeping their order.
    pub fn new(flights: Vec<Flight>) -> Self {
        Self {
            flights: flights.into_iter().map(Arc::new).collect(),
        }
    }

    /// Load a catalog from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        loader::read_path(path.as_ref()).map(Self::new)
    }

    /// Load a catalog from CSV data.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        loader::read_flights(reader).map(Self::new)
    }

    /// All flights in catalog order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    /// Flights leaving `airport`, in catalog order.
    pub fn departures_from(&self, airport: Airport) -> impl Iterator<Item = &Arc<Flight>> {
        self.flights.iter().filter(move |f| f.origin() == airport)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

impl FromIterator<Flight> for Catalog {
    fn from_iter<I: IntoIterator<Item = Flight>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

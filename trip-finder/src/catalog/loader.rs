//! CSV reader for flight catalogs.
//!
//! Expected layout: one header row, then one flight per row with columns
//! `flight_no, origin, destination, departure, arrival, base_price,
//! bag_price, bags_allowed`. Columns are read by position.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use super::error::CatalogError;
use crate::domain::{Airport, Fare, Flight, FlightTime};

const COLUMNS: [&str; 8] = [
    "flight_no",
    "origin",
    "destination",
    "departure",
    "arrival",
    "base_price",
    "bag_price",
    "bags_allowed",
];

/// Read every flight from a CSV file.
pub fn read_path(path: &Path) -> Result<Vec<Flight>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let flights = read_flights(file)?;
    info!(path = %path.display(), flights = flights.len(), "loaded flight catalog");
    Ok(flights)
}

/// Read every flight from CSV data.
///
/// Stops at the first bad row; nothing is returned unless every row parses.
pub fn read_flights<R: Read>(reader: R) -> Result<Vec<Flight>, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut flights = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let flight = parse_record(&record, line)?;
        flights.push(flight);
    }

    debug!(flights = flights.len(), "parsed catalog rows");
    Ok(flights)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Flight, CatalogError> {
    let field = |idx: usize| {
        record.get(idx).ok_or_else(|| {
            CatalogError::row(line, format!("missing column {}", COLUMNS[idx]))
        })
    };

    let flight_no = field(0)?;
    let origin = parse_with(field(1)?, line, Airport::parse)?;
    let destination = parse_with(field(2)?, line, Airport::parse)?;
    let departure = parse_with(field(3)?, line, FlightTime::parse)?;
    let arrival = parse_with(field(4)?, line, FlightTime::parse)?;
    let base_price = parse_number::<f64>(field(5)?, COLUMNS[5], line)?;
    let bag_price = parse_number::<f64>(field(6)?, COLUMNS[6], line)?;
    let bags_allowed = parse_number::<u32>(field(7)?, COLUMNS[7], line)?;

    Flight::new(
        flight_no,
        origin,
        destination,
        departure,
        arrival,
        Fare::new(base_price, bag_price, bags_allowed),
    )
    .map_err(|e| CatalogError::row(line, e.to_string()))
}

fn parse_with<T, E: std::fmt::Display>(
    raw: &str,
    line: u64,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, CatalogError> {
    parse(raw).map_err(|e| CatalogError::row(line, e.to_string()))
}

fn parse_number<T: FromStr>(raw: &str, column: &str, line: u64) -> Result<T, CatalogError> {
    raw.parse()
        .map_err(|_| CatalogError::row(line, format!("invalid {column} {raw:?}")))
}

//! Data transfer objects for printed results.

use chrono::Duration;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::{Airport, Flight};
use crate::planner::TripResult;

/// One ranked result as it appears in the JSON output.
#[derive(Debug, Serialize)]
pub struct TripResultDto<'a> {
    /// Flights in travel order
    pub flights: Vec<&'a Flight>,

    /// Tightest per-flight bag allowance
    pub bags_allowed: u32,

    /// Bags requested
    pub bags_count: u32,

    /// Requested destination
    pub destination: Airport,

    /// Requested origin
    pub origin: Airport,

    /// Fares plus bag fees
    pub total_price: f64,

    /// Elapsed time, e.g. "5:30:00" or "1 day, 2:15:00"
    pub travel_time: String,
}

impl<'a> From<&'a TripResult> for TripResultDto<'a> {
    fn from(result: &'a TripResult) -> Self {
        Self {
            flights: result.flights.iter().map(|f| f.as_ref()).collect(),
            bags_allowed: result.bags_allowed,
            bags_count: result.bags_count,
            destination: result.destination,
            origin: result.origin,
            total_price: result.total_price,
            travel_time: format_travel_time(result.travel_time),
        }
    }
}

/// Render a duration as `H:MM:SS`, prefixed by `N day(s), ` when it spans
/// whole days.
///
/// ```
/// use chrono::Duration;
/// use trip_finder::output::format_travel_time;
///
/// assert_eq!(format_travel_time(Duration::minutes(270)), "4:30:00");
/// assert_eq!(format_travel_time(Duration::hours(26)), "1 day, 2:00:00");
/// assert_eq!(format_travel_time(Duration::hours(50)), "2 days, 2:00:00");
/// ```
pub fn format_travel_time(duration: Duration) -> String {
    let total = duration.num_seconds();
    let (days, rest) = (total.div_euclid(86_400), total.rem_euclid(86_400));
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{days} day, {clock}"),
        _ => format!("{days} days, {clock}"),
    }
}

/// Serialise ranked results as a JSON array.
///
/// Pretty output is indented by four spaces; compact output is one line.
pub fn to_json(results: &[TripResult], pretty: bool) -> serde_json::Result<String> {
    let dtos: Vec<TripResultDto<'_>> = results.iter().map(TripResultDto::from).collect();

    if !pretty {
        return serde_json::to_string(&dtos);
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    dtos.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

//! JSON rendering of ranked results.

mod dto;

pub use dto::{TripResultDto, format_travel_time, to_json};

//! Trip planner using depth-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "Which flights get me from here to there, and which is cheapest?"
//!
//! Search enumerates connecting flights under stop and layover limits,
//! round trips pair outbound with inbound itineraries, and ranking prices
//! everything and filters by bag allowance.

mod config;
mod rank;
mod round_trip;
mod search;

pub use config::SearchConfig;
pub use rank::{TripResult, compile_results, rank_results};
pub use round_trip::match_return_trips;
pub use search::{Planner, SearchError, SearchRequest, find_itineraries};

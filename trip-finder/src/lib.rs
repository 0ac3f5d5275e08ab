//! Flight trip finder.
//!
//! Answers: "Given this list of flights, how can I get from A to B
//! (and back), and what's the cheapest way with my luggage?"

pub mod catalog;
pub mod domain;
pub mod output;
pub mod planner;

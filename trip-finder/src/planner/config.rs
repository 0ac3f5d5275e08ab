//! Search configuration for the trip finder.

use chrono::Duration;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of intermediate stops per direction.
    pub max_stops: usize,

    /// Number of checked bags the passenger is travelling with.
    pub bags: u32,

    /// Whether to search for a return journey as well.
    pub round_trip: bool,

    /// Shortest acceptable layover between connecting flights (minutes).
    pub min_layover_mins: i64,

    /// Longest acceptable layover between connecting flights (minutes).
    pub max_layover_mins: i64,
}

impl SearchConfig {
    /// Create a new configuration with the default layover window.
    pub fn new(max_stops: usize, bags: u32, round_trip: bool) -> Self {
        Self {
            max_stops,
            bags,
            round_trip,
            ..Self::default()
        }
    }

    /// Set a custom layover window.
    pub fn with_layover_window(mut self, min_mins: i64, max_mins: i64) -> Self {
        self.min_layover_mins = min_mins;
        self.max_layover_mins = max_mins;
        self
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::minutes(self.max_layover_mins)
    }

    /// Returns true if `layover` falls inside the window, ends included.
    pub fn layover_ok(&self, layover: Duration) -> bool {
        self.min_layover() <= layover && layover <= self.max_layover()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_stops: 0,
            bags: 0,
            round_trip: false,
            min_layover_mins: 60,  // 1 hour
            max_layover_mins: 360, // 6 hours
        }
    }
}

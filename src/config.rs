//! Batching thresholds.
//!
//! Both values were tuned against the identifier-hash proximity score of
//! [`LocationGraph::calculate_distance`](crate::graph::LocationGraph::calculate_distance),
//! not against real travel distance.

use serde::{Deserialize, Serialize};

/// Default maximum pickup-time gap between consecutive orders of one rider.
pub const DEFAULT_MAX_TIME_GAP: i32 = 10;

/// Default maximum proximity score for two locations to count as "nearby".
pub const DEFAULT_MAX_PROXIMITY: i32 = 1;

/// Thresholds consulted by the batching rules.
///
/// `max_time_gap` doubles as the combined distance + time budget of the
/// "on the way" rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchingConfig {
    /// Maximum `|a.pickup_time - b.pickup_time|`.
    #[serde(default = "default_max_time_gap")]
    pub max_time_gap: i32,
    /// Maximum proximity score for two locations to be batched together.
    #[serde(default = "default_max_proximity")]
    pub max_proximity: i32,
}

fn default_max_time_gap() -> i32 {
    DEFAULT_MAX_TIME_GAP
}

fn default_max_proximity() -> i32 {
    DEFAULT_MAX_PROXIMITY
}

impl BatchingConfig {
    /// Creates a config with the default thresholds.
    pub fn new() -> Self {
        Self {
            max_time_gap: DEFAULT_MAX_TIME_GAP,
            max_proximity: DEFAULT_MAX_PROXIMITY,
        }
    }

    /// Sets the maximum pickup-time gap.
    pub fn with_max_time_gap(mut self, gap: i32) -> Self {
        self.max_time_gap = gap;
        self
    }

    /// Sets the maximum proximity score.
    pub fn with_max_proximity(mut self, proximity: i32) -> Self {
        self.max_proximity = proximity;
        self
    }
}

impl Default for BatchingConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Evaluation context for batching rules.

use crate::config::BatchingConfig;
use crate::graph::LocationGraph;
use crate::models::Order;

/// Read-only state passed to every rule evaluation of one run.
///
/// Borrows the graph for the whole run, so it cannot change mid-pass.
#[derive(Debug, Clone, Copy)]
pub struct BatchingContext<'a> {
    pub graph: &'a LocationGraph,
    pub config: BatchingConfig,
}

impl<'a> BatchingContext<'a> {
    /// Creates a context over `graph` with the given thresholds.
    pub fn new(graph: &'a LocationGraph, config: BatchingConfig) -> Self {
        Self { graph, config }
    }

    /// Creates a context with default thresholds.
    pub fn with_defaults(graph: &'a LocationGraph) -> Self {
        Self::new(graph, BatchingConfig::default())
    }

    /// Heuristic proximity score between two locations. May be negative.
    #[inline]
    pub fn proximity(&self, a: &str, b: &str) -> i32 {
        self.graph.calculate_distance(a, b)
    }

    /// Pickup times are at most `max_time_gap` apart.
    #[inline]
    pub fn within_time_gap(&self, last: &Order, candidate: &Order) -> bool {
        last.time_gap(candidate) <= self.config.max_time_gap
    }

    /// Proximity score is at most `max_proximity`.
    #[inline]
    pub fn nearby(&self, a: &str, b: &str) -> bool {
        self.proximity(a, b) <= self.config.max_proximity
    }

    /// Kitchen proximity plus pickup-time gap fits within `max_time_gap`.
    ///
    /// The sum wraps like the proximity score itself.
    pub fn pickup_on_the_way(&self, last: &Order, candidate: &Order) -> bool {
        self.proximity(&last.kitchen_id, &candidate.kitchen_id)
            .wrapping_add(last.time_gap(candidate))
            <= self.config.max_time_gap
    }
}

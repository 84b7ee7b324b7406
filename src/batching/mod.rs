//! Greedy order-to-rider batching.
//!
//! Orders are processed in submission order. Each order is compared with
//! the *last* order of every existing rider, in rider creation order, and
//! appended to the first rider whose last order is compatible under a
//! chain of [`BatchingRule`]s. If nobody accepts, a new rider is opened.
//!
//! # Usage
//!
//! ```
//! use u_batch::batching::BatchAssignmentEngine;
//! use u_batch::graph::LocationGraph;
//! use u_batch::models::Order;
//!
//! let mut graph = LocationGraph::new();
//! graph.add_vertex("KitchenA");
//! graph.add_vertex("CustomerA");
//!
//! let orders = vec![
//!     Order::new("1", "KitchenA", "CustomerA", 10),
//!     Order::new("2", "KitchenA", "CustomerA", 20),
//! ];
//!
//! let plan = BatchAssignmentEngine::standard().assign(&orders, &graph).unwrap();
//! assert_eq!(plan.rider_count(), 1);
//! assert_eq!(plan.riders[0].order_ids(), vec!["1", "2"]);
//! ```

mod context;
mod engine;
pub mod rules;
mod summary;

pub use context::BatchingContext;
pub use engine::BatchAssignmentEngine;
pub use summary::BatchSummary;

use crate::models::Order;
use std::fmt::Debug;

/// A compatibility test between a rider's last order and a new order.
///
/// Rules are evaluated in chain order; the first rule that accepts wins.
pub trait BatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SAME_ROUTE").
    fn name(&self) -> &'static str;

    /// Whether `candidate` may be appended after `last` on the same rider.
    fn accepts(&self, last: &Order, candidate: &Order, context: &BatchingContext<'_>) -> bool;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

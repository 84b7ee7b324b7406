//! Delivery optimizer façade.
//!
//! Owns a location graph and an order queue, and runs the batching engine
//! over them. Each [`DeliveryOptimizer::optimize`] call builds a fresh plan;
//! the queue and graph are left untouched.

use crate::batching::BatchAssignmentEngine;
use crate::error::Result;
use crate::graph::LocationGraph;
use crate::models::{BatchPlan, Order};

/// Graph + order queue + engine.
///
/// # Example
/// ```
/// use u_batch::optimizer::DeliveryOptimizer;
/// use u_batch::models::Order;
///
/// let mut optimizer = DeliveryOptimizer::new();
/// optimizer.add_location("KitchenA");
/// optimizer.add_location("CustomerA");
/// optimizer.add_edge("KitchenA", "CustomerA", 500).unwrap();
/// optimizer.add_order(Order::new("1", "KitchenA", "CustomerA", 10));
///
/// let plan = optimizer.optimize().unwrap();
/// assert_eq!(plan.riders[0].rider_id, "Rider1");
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryOptimizer {
    graph: LocationGraph,
    orders: Vec<Order>,
    engine: BatchAssignmentEngine,
}

impl DeliveryOptimizer {
    /// Creates an optimizer with the standard rule chain.
    pub fn new() -> Self {
        Self {
            graph: LocationGraph::new(),
            orders: Vec::new(),
            engine: BatchAssignmentEngine::standard(),
        }
    }

    /// Replaces the batching engine.
    pub fn with_engine(mut self, engine: BatchAssignmentEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Uses an already built graph.
    pub fn with_graph(mut self, graph: LocationGraph) -> Self {
        self.graph = graph;
        self
    }

    /// Registers a location.
    pub fn add_location(&mut self, id: impl Into<String>) {
        self.graph.add_vertex(id);
    }

    /// Connects two registered locations.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: u64) -> Result<()> {
        self.graph.add_edge(a, b, weight)
    }

    /// Queues an order. Submission order is batching order.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn engine(&self) -> &BatchAssignmentEngine {
        &self.engine
    }

    /// Runs one batching pass over the queued orders.
    pub fn optimize(&self) -> Result<BatchPlan> {
        self.engine.assign(&self.orders, &self.graph)
    }
}

impl Default for DeliveryOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

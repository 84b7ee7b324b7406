//! Rider (courier) model.

use serde::{Deserialize, Serialize};

use super::Order;

/// A courier and the orders batched onto it, in assignment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rider {
    /// Sequential identifier (`"Rider1"`, `"Rider2"`, ...).
    pub rider_id: String,
    /// Assigned orders. Insertion order = assignment order.
    pub orders: Vec<Order>,
}

impl Rider {
    /// Creates a rider with no orders.
    pub fn new(rider_id: impl Into<String>) -> Self {
        Self {
            rider_id: rider_id.into(),
            orders: Vec::new(),
        }
    }

    /// Identifier for the rider created at 0-based position `index`.
    pub fn sequential_id(index: usize) -> String {
        format!("Rider{}", index + 1)
    }

    /// Appends an order.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// The most recently assigned order.
    #[inline]
    pub fn last_order(&self) -> Option<&Order> {
        self.orders.last()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.orders.is_empty()
    }

    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Order IDs in assignment order.
    pub fn order_ids(&self) -> Vec<&str> {
        self.orders.iter().map(|o| o.order_id.as_str()).collect()
    }
}

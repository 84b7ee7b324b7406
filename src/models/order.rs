//! Delivery order model.

use serde::{Deserialize, Serialize};

/// A delivery order: one pickup at a kitchen, one drop-off at a customer.
///
/// Immutable once created. `pickup_time` is the ready time in a
/// caller-defined unit; only differences between orders are ever used,
/// computed in wrapping 32-bit arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// Caller-assigned identifier. Uniqueness is not enforced by the engine.
    pub order_id: String,
    /// Pickup location.
    pub kitchen_id: String,
    /// Drop-off location.
    pub customer_id: String,
    /// Ready time.
    pub pickup_time: i32,
}

impl Order {
    /// Creates a new order.
    pub fn new(
        order_id: impl Into<String>,
        kitchen_id: impl Into<String>,
        customer_id: impl Into<String>,
        pickup_time: i32,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            kitchen_id: kitchen_id.into(),
            customer_id: customer_id.into(),
            pickup_time,
        }
    }

    /// Absolute pickup-time difference to another order.
    ///
    /// Wraps on overflow; `|i32::MIN|` stays `i32::MIN`.
    #[inline]
    pub fn time_gap(&self, other: &Order) -> i32 {
        self.pickup_time.wrapping_sub(other.pickup_time).wrapping_abs()
    }

    #[inline]
    pub fn same_kitchen(&self, other: &Order) -> bool {
        self.kitchen_id == other.kitchen_id
    }

    #[inline]
    pub fn same_customer(&self, other: &Order) -> bool {
        self.customer_id == other.customer_id
    }
}

//! Batch plan (solution) model.
//!
//! A plan is the output of one batching run: the riders in creation
//! order, each carrying its orders, plus a log recording why every order
//! landed where it did.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Rider;

/// Result of one batching run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchPlan {
    /// Riders in creation order.
    pub riders: Vec<Rider>,
    /// Placement records in order-processing order.
    pub assignments: Vec<BatchAssignment>,
}

/// Records that an order was appended to a rider, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchAssignment {
    pub order_id: String,
    pub rider_id: String,
    pub reason: AssignmentReason,
}

/// Why an order was placed on its rider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentReason {
    /// No existing rider accepted the order; a new one was opened.
    OpenedRider,
    /// The rider had no orders yet.
    IdleRider,
    /// A batching rule accepted the order against the rider's last order.
    Rule {
        /// Rule name (e.g. "SAME_ROUTE").
        name: String,
        /// 1-based position in the rule chain.
        priority: usize,
    },
}

impl BatchAssignment {
    /// Creates a new assignment record.
    pub fn new(
        order_id: impl Into<String>,
        rider_id: impl Into<String>,
        reason: AssignmentReason,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            rider_id: rider_id.into(),
            reason,
        }
    }

    /// Name of the accepting rule, if a rule placed the order.
    pub fn rule_name(&self) -> Option<&str> {
        match &self.reason {
            AssignmentReason::Rule { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

impl AssignmentReason {
    pub fn rule(name: impl Into<String>, priority: usize) -> Self {
        Self::Rule {
            name: name.into(),
            priority,
        }
    }
}

impl BatchPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plan continuing from an existing fleet.
    pub fn with_riders(riders: Vec<Rider>) -> Self {
        Self {
            riders,
            assignments: Vec::new(),
        }
    }

    /// Number of riders.
    pub fn rider_count(&self) -> usize {
        self.riders.len()
    }

    /// Number of orders across all riders.
    pub fn order_count(&self) -> usize {
        self.riders.iter().map(Rider::order_count).sum()
    }

    /// Finds a rider by ID.
    pub fn rider(&self, rider_id: &str) -> Option<&Rider> {
        self.riders.iter().find(|r| r.rider_id == rider_id)
    }

    /// The rider carrying the given order.
    pub fn rider_for_order(&self, order_id: &str) -> Option<&Rider> {
        self.riders
            .iter()
            .find(|r| r.orders.iter().any(|o| o.order_id == order_id))
    }

    /// The placement record for the given order.
    pub fn assignment_for_order(&self, order_id: &str) -> Option<&BatchAssignment> {
        self.assignments.iter().find(|a| a.order_id == order_id)
    }

    /// Placement records for the given rider, in placement order.
    pub fn assignments_for_rider(&self, rider_id: &str) -> Vec<&BatchAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.rider_id == rider_id)
            .collect()
    }

    /// Order IDs per rider, keyed by rider ID.
    pub fn partition(&self) -> HashMap<&str, Vec<&str>> {
        self.riders
            .iter()
            .map(|r| (r.rider_id.as_str(), r.order_ids()))
            .collect()
    }

    /// Consumes the plan, yielding the riders.
    pub fn into_riders(self) -> Vec<Rider> {
        self.riders
    }
}

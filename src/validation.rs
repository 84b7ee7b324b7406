//! Input validation for batching runs.
//!
//! The engine itself never deduplicates orders and stops at the first
//! unregistered location. These checks run ahead of it and report every
//! problem at once:
//! - Duplicate order IDs
//! - Kitchen or customer locations missing from the graph

use crate::graph::LocationGraph;
use crate::models::Order;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two orders share the same ID.
    DuplicateOrderId,
    /// An order's kitchen is not a registered location.
    UnknownKitchen,
    /// An order's customer is not a registered location.
    UnknownCustomer,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates orders against a location graph.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_orders(orders: &[Order], graph: &LocationGraph) -> ValidationResult {
    let mut errors = Vec::new();
    let mut order_ids = HashSet::new();

    for order in orders {
        if !order_ids.insert(order.order_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateOrderId,
                format!("Duplicate order ID: {}", order.order_id),
            ));
        }

        if !graph.contains(&order.kitchen_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownKitchen,
                format!(
                    "Order '{}' references unknown kitchen '{}'",
                    order.order_id, order.kitchen_id
                ),
            ));
        }

        if !graph.contains(&order.customer_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCustomer,
                format!(
                    "Order '{}' references unknown customer '{}'",
                    order.order_id, order.customer_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Batching domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `Order` | One pickup + one drop-off with a ready time |
//! | `Rider` | Courier accumulating orders in assignment order |
//! | `BatchPlan` | Output of one batching run |
//! | `BatchAssignment` | Why a given order landed on a given rider |

mod order;
mod plan;
mod rider;

pub use order::Order;
pub use plan::{AssignmentReason, BatchAssignment, BatchPlan};
pub use rider::Rider;

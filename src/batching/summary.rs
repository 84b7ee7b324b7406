//! Batch plan metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Rider count | Riders in the plan, including seeded ones |
//! | Order count | Orders carried across all riders |
//! | Largest batch | Most orders on a single rider |
//! | Avg batch size | order count / rider count |
//! | Opened riders | Riders created during the run |
//! | Hits by rule | Placements per accepting rule name |

use std::collections::HashMap;

use crate::models::{AssignmentReason, BatchPlan};

/// Summary statistics of a batch plan.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub rider_count: usize,
    pub order_count: usize,
    pub largest_batch: usize,
    /// 0.0 for an empty plan.
    pub avg_batch_size: f64,
    pub opened_riders: usize,
    pub hits_by_rule: HashMap<String, usize>,
}

impl BatchSummary {
    /// Computes the summary of a plan.
    pub fn calculate(plan: &BatchPlan) -> Self {
        let rider_count = plan.rider_count();
        let order_count = plan.order_count();
        let largest_batch = plan
            .riders
            .iter()
            .map(|r| r.order_count())
            .max()
            .unwrap_or(0);
        let avg_batch_size = if rider_count > 0 {
            order_count as f64 / rider_count as f64
        } else {
            0.0
        };

        let mut opened_riders = 0;
        let mut hits_by_rule: HashMap<String, usize> = HashMap::new();
        for assignment in &plan.assignments {
            match &assignment.reason {
                AssignmentReason::OpenedRider => opened_riders += 1,
                AssignmentReason::IdleRider => {}
                AssignmentReason::Rule { name, .. } => {
                    *hits_by_rule.entry(name.clone()).or_insert(0) += 1;
                }
            }
        }

        Self {
            rider_count,
            order_count,
            largest_batch,
            avg_batch_size,
            opened_riders,
            hits_by_rule,
        }
    }
}

//! Built-in batching rules.
//!
//! The standard chain, in priority order:
//!
//! | # | Rule | Accepts when |
//! |---|------|--------------|
//! | 1 | `SameRoute` | same kitchen, same customer, time gap ok |
//! | 2 | `NearbyKitchens` | different kitchen, same customer, time gap ok, kitchens nearby |
//! | 3 | `NearbyDrops` | same kitchen, different customer, time gap ok, customers nearby |
//! | 4 | `PickupOnTheWay` | same customer, kitchen proximity + time gap within budget |
//! | 5 | `DropOnTheWay` | customers nearby, kitchen proximity + time gap within budget |
//! | 6 | `SharedKitchenNearbyDrop` | same kitchen, customers nearby, time gap ok |
//!
//! "Nearby" and "time gap ok" are defined by [`BatchingConfig`](crate::config::BatchingConfig).

use std::sync::Arc;

use super::{BatchingContext, BatchingRule};
use crate::models::Order;

/// The six standard rules in priority order.
pub fn standard_rules() -> Vec<Arc<dyn BatchingRule>> {
    vec![
        Arc::new(SameRoute),
        Arc::new(NearbyKitchens),
        Arc::new(NearbyDrops),
        Arc::new(PickupOnTheWay),
        Arc::new(DropOnTheWay),
        Arc::new(SharedKitchenNearbyDrop),
    ]
}

/// Same kitchen and same customer, close in time.
#[derive(Debug, Clone, Copy)]
pub struct SameRoute;

impl BatchingRule for SameRoute {
    fn name(&self) -> &'static str {
        "SAME_ROUTE"
    }

    fn accepts(&self, last: &Order, candidate: &Order, ctx: &BatchingContext<'_>) -> bool {
        candidate.same_kitchen(last)
            && candidate.same_customer(last)
            && ctx.within_time_gap(last, candidate)
    }

    fn description(&self) -> &'static str {
        "Same kitchen and customer"
    }
}

/// Two nearby kitchens delivering to one customer.
#[derive(Debug, Clone, Copy)]
pub struct NearbyKitchens;

impl BatchingRule for NearbyKitchens {
    fn name(&self) -> &'static str {
        "NEARBY_KITCHENS"
    }

    fn accepts(&self, last: &Order, candidate: &Order, ctx: &BatchingContext<'_>) -> bool {
        !candidate.same_kitchen(last)
            && candidate.same_customer(last)
            && ctx.within_time_gap(last, candidate)
            && ctx.nearby(&candidate.kitchen_id, &last.kitchen_id)
    }

    fn description(&self) -> &'static str {
        "Nearby kitchens, one drop"
    }
}

/// One kitchen delivering to two nearby customers.
#[derive(Debug, Clone, Copy)]
pub struct NearbyDrops;

impl BatchingRule for NearbyDrops {
    fn name(&self) -> &'static str {
        "NEARBY_DROPS"
    }

    fn accepts(&self, last: &Order, candidate: &Order, ctx: &BatchingContext<'_>) -> bool {
        candidate.same_kitchen(last)
            && !candidate.same_customer(last)
            && ctx.within_time_gap(last, candidate)
            && ctx.nearby(&candidate.customer_id, &last.customer_id)
    }

    fn description(&self) -> &'static str {
        "One kitchen, nearby drops"
    }
}

/// Same customer; the second pickup is on the way.
///
/// Kitchen proximity and time gap share one budget.
#[derive(Debug, Clone, Copy)]
pub struct PickupOnTheWay;

impl BatchingRule for PickupOnTheWay {
    fn name(&self) -> &'static str {
        "PICKUP_ON_THE_WAY"
    }

    fn accepts(&self, last: &Order, candidate: &Order, ctx: &BatchingContext<'_>) -> bool {
        candidate.same_customer(last) && ctx.pickup_on_the_way(last, candidate)
    }

    fn description(&self) -> &'static str {
        "Second pickup on the way"
    }
}

/// Nearby customers and the pickup fits the combined budget,
/// regardless of kitchen or customer identity.
#[derive(Debug, Clone, Copy)]
pub struct DropOnTheWay;

impl BatchingRule for DropOnTheWay {
    fn name(&self) -> &'static str {
        "DROP_ON_THE_WAY"
    }

    fn accepts(&self, last: &Order, candidate: &Order, ctx: &BatchingContext<'_>) -> bool {
        ctx.nearby(&last.customer_id, &candidate.customer_id)
            && ctx.pickup_on_the_way(last, candidate)
    }

    fn description(&self) -> &'static str {
        "Second drop on the way"
    }
}

/// Same kitchen, nearby customer, close in time.
///
/// Everything this accepts is already accepted by `SameRoute` or
/// `NearbyDrops` in the standard chain; it only fires in custom chains.
#[derive(Debug, Clone, Copy)]
pub struct SharedKitchenNearbyDrop;

impl BatchingRule for SharedKitchenNearbyDrop {
    fn name(&self) -> &'static str {
        "SHARED_KITCHEN_NEARBY_DROP"
    }

    fn accepts(&self, last: &Order, candidate: &Order, ctx: &BatchingContext<'_>) -> bool {
        candidate.same_kitchen(last)
            && ctx.nearby(&last.customer_id, &candidate.customer_id)
            && ctx.within_time_gap(last, candidate)
    }

    fn description(&self) -> &'static str {
        "Shared kitchen, nearby drop"
    }
}

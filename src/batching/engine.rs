//! Greedy first-fit assignment engine.
//!
//! # Algorithm
//!
//! For each order, in submission order:
//! 1. Scan riders in creation order.
//! 2. An idle rider takes the order immediately.
//! 3. Otherwise evaluate the rule chain against the rider's last order;
//!    the first accepting rule appends the order and stops the scan.
//! 4. If no rider accepts, open `Rider{n+1}` at the end of the list.
//!
//! No sorting, no backtracking, no reassignment. Scan order and rule
//! order are both part of the observable result.
//!
//! # Complexity
//! O(n * r * k) where n=orders, r=riders, k=rules.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use super::rules::standard_rules;
use super::{BatchingContext, BatchingRule};
use crate::config::BatchingConfig;
use crate::error::Result;
use crate::graph::LocationGraph;
use crate::models::{AssignmentReason, BatchAssignment, BatchPlan, Order, Rider};

/// Rule-driven greedy batching engine.
///
/// # Example
/// ```
/// use u_batch::batching::{rules, BatchAssignmentEngine};
/// use u_batch::config::BatchingConfig;
///
/// let engine = BatchAssignmentEngine::new()
///     .with_rule(rules::SameRoute)
///     .with_rule(rules::NearbyDrops)
///     .with_config(BatchingConfig::new().with_max_time_gap(15));
/// assert_eq!(engine.rule_names(), vec!["SAME_ROUTE", "NEARBY_DROPS"]);
/// ```
#[derive(Clone)]
pub struct BatchAssignmentEngine {
    rules: Vec<Arc<dyn BatchingRule>>,
    config: BatchingConfig,
}

impl BatchAssignmentEngine {
    /// Creates an engine with no rules. Every order then opens its own
    /// rider unless an idle rider is available.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            config: BatchingConfig::default(),
        }
    }

    /// Creates an engine with the six standard rules and default thresholds.
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
            config: BatchingConfig::default(),
        }
    }

    /// Appends a rule at the lowest priority.
    pub fn with_rule<R: BatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the thresholds.
    pub fn with_config(mut self, config: BatchingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BatchingConfig {
        &self.config
    }

    /// Rule names in priority order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Batches `orders` onto a fresh fleet.
    ///
    /// Fails with [`Error::UnknownVertex`](crate::error::Error::UnknownVertex)
    /// if an order references a location not registered in `graph`.
    pub fn assign(&self, orders: &[Order], graph: &LocationGraph) -> Result<BatchPlan> {
        self.assign_onto(Vec::new(), orders, graph)
    }

    /// Batches `orders` onto an existing fleet.
    ///
    /// Existing riders keep their orders and are scanned first; idle ones
    /// take the first order that reaches them. New riders are named from
    /// the fleet size, so callers seeding riders should use
    /// [`Rider::sequential_id`] to avoid duplicate IDs.
    pub fn assign_onto(
        &self,
        riders: Vec<Rider>,
        orders: &[Order],
        graph: &LocationGraph,
    ) -> Result<BatchPlan> {
        let ctx = BatchingContext::new(graph, self.config);
        let mut plan = BatchPlan::with_riders(riders);

        for order in orders {
            if let Err(err) = graph
                .require_vertex(&order.kitchen_id)
                .and_then(|_| graph.require_vertex(&order.customer_id))
            {
                warn!(order_id = %order.order_id, error = %err, "order references unregistered location");
                return Err(err);
            }

            let (index, reason) = match self.find_rider(&plan.riders, order, &ctx) {
                Some(found) => found,
                None => {
                    let rider_id = Rider::sequential_id(plan.riders.len());
                    plan.riders.push(Rider::new(rider_id));
                    (plan.riders.len() - 1, AssignmentReason::OpenedRider)
                }
            };

            let rider = &mut plan.riders[index];
            rider.add_order(order.clone());
            debug!(
                order_id = %order.order_id,
                rider_id = %rider.rider_id,
                reason = ?reason,
                "order assigned"
            );
            plan.assignments.push(BatchAssignment::new(
                order.order_id.as_str(),
                rider.rider_id.as_str(),
                reason,
            ));
        }

        info!(
            riders = plan.rider_count(),
            orders = plan.order_count(),
            "batching pass complete"
        );
        Ok(plan)
    }

    /// First rule in the chain accepting `candidate` after `last`.
    pub fn match_rule(
        &self,
        last: &Order,
        candidate: &Order,
        ctx: &BatchingContext<'_>,
    ) -> Option<AssignmentReason> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.accepts(last, candidate, ctx))
            .map(|(i, rule)| AssignmentReason::rule(rule.name(), i + 1))
    }

    fn find_rider(
        &self,
        riders: &[Rider],
        order: &Order,
        ctx: &BatchingContext<'_>,
    ) -> Option<(usize, AssignmentReason)> {
        for (index, rider) in riders.iter().enumerate() {
            let Some(last) = rider.last_order() else {
                return Some((index, AssignmentReason::IdleRider));
            };

            if let Some(reason) = self.match_rule(last, order, ctx) {
                return Some((index, reason));
            }
            trace!(
                order_id = %order.order_id,
                rider_id = %rider.rider_id,
                last_order_id = %last.order_id,
                "rider rejected order"
            );
        }
        None
    }
}

impl Default for BatchAssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BatchAssignmentEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchAssignmentEngine")
            .field("rules", &self.rule_names())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batching::rules;
    use crate::error::Error;

    fn demo_graph() -> LocationGraph {
        let mut graph = LocationGraph::new();
        for id in [
            "KitchenA", "KitchenB", "KitchenC", "CustomerA", "CustomerB", "CustomerC",
        ] {
            graph.add_vertex(id);
        }
        graph
    }

    fn order(id: &str, kitchen: &str, customer: &str, time: i32) -> Order {
        Order::new(id, kitchen, customer, time)
    }

    fn demo_orders() -> Vec<Order> {
        vec![
            order("1", "KitchenA", "CustomerA", 10),
            order("2", "KitchenA", "CustomerA", 20),
            order("3", "KitchenB", "CustomerB", 10),
            order("4", "KitchenA", "CustomerB", 10),
            order("5", "KitchenC", "CustomerC", 10),
            order("6", "KitchenC", "CustomerC", 20),
        ]
    }

    fn ids(plan: &BatchPlan) -> Vec<(&str, Vec<&str>)> {
        plan.riders
            .iter()
            .map(|r| (r.rider_id.as_str(), r.order_ids()))
            .collect()
    }

    #[test]
    fn test_demo_partition() {
        let plan = BatchAssignmentEngine::standard()
            .assign(&demo_orders(), &demo_graph())
            .unwrap();

        assert_eq!(
            ids(&plan),
            vec![
                ("Rider1", vec!["1", "2", "4", "5", "6"]),
                ("Rider2", vec!["3"]),
            ]
        );

        let rule = |id: &str| plan.assignment_for_order(id).unwrap().reason.clone();
        assert_eq!(rule("1"), AssignmentReason::OpenedRider);
        assert_eq!(rule("2"), AssignmentReason::rule("SAME_ROUTE", 1));
        assert_eq!(rule("3"), AssignmentReason::OpenedRider);
        assert_eq!(rule("4"), AssignmentReason::rule("NEARBY_DROPS", 3));
        assert_eq!(rule("5"), AssignmentReason::rule("DROP_ON_THE_WAY", 5));
        assert_eq!(rule("6"), AssignmentReason::rule("SAME_ROUTE", 1));
    }

    #[test]
    fn test_empty_input() {
        let plan = BatchAssignmentEngine::standard()
            .assign(&[], &demo_graph())
            .unwrap();
        assert_eq!(plan.rider_count(), 0);
        assert!(plan.assignments.is_empty());
    }

    #[test]
    fn test_rule_priority_same_route_over_pickup_on_the_way() {
        let graph = demo_graph();
        let ctx = BatchingContext::with_defaults(&graph);
        let last = order("1", "KitchenA", "CustomerA", 10);
        let candidate = order("2", "KitchenA", "CustomerA", 15);

        // Both conditions hold on their own
        assert!(rules::SameRoute.accepts(&last, &candidate, &ctx));
        assert!(rules::PickupOnTheWay.accepts(&last, &candidate, &ctx));

        let engine = BatchAssignmentEngine::standard();
        assert_eq!(
            engine.match_rule(&last, &candidate, &ctx),
            Some(AssignmentReason::rule("SAME_ROUTE", 1))
        );

        let reversed = BatchAssignmentEngine::new()
            .with_rule(rules::PickupOnTheWay)
            .with_rule(rules::SameRoute);
        assert_eq!(
            reversed.match_rule(&last, &candidate, &ctx),
            Some(AssignmentReason::rule("PICKUP_ON_THE_WAY", 1))
        );
    }

    #[test]
    fn test_new_rider_fallback() {
        let orders = vec![
            order("1", "KitchenA", "CustomerA", 10),
            // CustomerA/CustomerC proximity 2: opens Rider2
            order("2", "KitchenC", "CustomerC", 10),
            // Compatible with neither last order: 90 time units later
            order("3", "KitchenB", "CustomerB", 100),
        ];
        let plan = BatchAssignmentEngine::standard()
            .assign(&orders, &demo_graph())
            .unwrap();

        assert_eq!(plan.rider_count(), 3);
        assert_eq!(plan.riders[2].rider_id, "Rider3");
        assert_eq!(plan.riders[2].order_ids(), vec!["3"]);
        assert_eq!(
            plan.assignment_for_order("3").unwrap().reason,
            AssignmentReason::OpenedRider
        );
    }

    #[test]
    fn test_only_last_order_matters() {
        let orders = vec![
            order("1", "KitchenA", "CustomerA", 10),
            order("2", "KitchenA", "CustomerA", 20),
            // Same route as order 1 but 20 after it; 10 after order 2
            order("3", "KitchenA", "CustomerA", 30),
            // Matches order 1 exactly but rider 1 now ends with order 3
            order("4", "KitchenA", "CustomerA", 10),
        ];
        let plan = BatchAssignmentEngine::standard()
            .assign(&orders, &demo_graph())
            .unwrap();

        assert_eq!(
            ids(&plan),
            vec![("Rider1", vec!["1", "2", "3"]), ("Rider2", vec!["4"])]
        );
    }

    #[test]
    fn test_first_fit_scans_in_creation_order() {
        let orders = vec![
            order("1", "KitchenA", "CustomerA", 10),
            // CustomerA/CustomerC are not nearby: opens Rider2
            order("2", "KitchenC", "CustomerC", 10),
            // Both riders accept via DROP_ON_THE_WAY; Rider1 is scanned first
            order("3", "KitchenB", "CustomerB", 10),
        ];
        let plan = BatchAssignmentEngine::standard()
            .assign(&orders, &demo_graph())
            .unwrap();

        assert_eq!(
            ids(&plan),
            vec![("Rider1", vec!["1", "3"]), ("Rider2", vec!["2"])]
        );
    }

    #[test]
    fn test_order_sensitivity() {
        let graph = demo_graph();
        let engine = BatchAssignmentEngine::standard();

        let a = order("a", "KitchenA", "CustomerA", 10);
        let b = order("b", "KitchenA", "CustomerA", 20);
        let c = order("c", "KitchenA", "CustomerA", 30);

        // a, b, c chain through consecutive 10-gaps
        let forward = engine.assign(&[a.clone(), b.clone(), c.clone()], &graph).unwrap();
        assert_eq!(forward.rider_count(), 1);

        // a then c are 20 apart: c opens a rider, b then joins Rider1
        let swapped = engine.assign(&[a, c, b], &graph).unwrap();
        assert_eq!(
            ids(&swapped),
            vec![("Rider1", vec!["a", "b"]), ("Rider2", vec!["c"])]
        );
    }

    #[test]
    fn test_idle_rider_takes_first_order() {
        let mut busy = Rider::new("Rider1");
        busy.add_order(order("0", "KitchenA", "CustomerA", 500));
        let fleet = vec![busy, Rider::new("Rider2")];

        let orders = vec![
            order("1", "KitchenC", "CustomerC", 10),
            order("2", "KitchenC", "CustomerC", 15),
            order("3", "KitchenB", "CustomerB", 90),
        ];
        let plan = BatchAssignmentEngine::standard()
            .assign_onto(fleet, &orders, &demo_graph())
            .unwrap();

        assert_eq!(
            ids(&plan),
            vec![
                ("Rider1", vec!["0"]),
                ("Rider2", vec!["1", "2"]),
                ("Rider3", vec!["3"]),
            ]
        );
        assert_eq!(
            plan.assignment_for_order("1").unwrap().reason,
            AssignmentReason::IdleRider
        );
        // Seeded orders are not logged
        assert!(plan.assignment_for_order("0").is_none());
    }

    #[test]
    fn test_unknown_location_fails() {
        let orders = vec![
            order("1", "KitchenA", "CustomerA", 10),
            order("2", "KitchenZ", "CustomerA", 10),
        ];
        let err = BatchAssignmentEngine::standard()
            .assign(&orders, &demo_graph())
            .unwrap_err();
        assert_eq!(err, Error::UnknownVertex("KitchenZ".into()));

        let err = BatchAssignmentEngine::standard()
            .assign(&[order("1", "KitchenA", "Nowhere", 10)], &demo_graph())
            .unwrap_err();
        assert_eq!(err, Error::UnknownVertex("Nowhere".into()));
    }

    #[test]
    fn test_no_rules_one_rider_per_order() {
        let plan = BatchAssignmentEngine::new()
            .assign(&demo_orders(), &demo_graph())
            .unwrap();
        assert_eq!(plan.rider_count(), 6);
        assert!(plan.riders.iter().all(|r| r.order_count() == 1));
    }

    #[test]
    fn test_custom_config_widens_time_gap() {
        let orders = vec![
            order("1", "KitchenA", "CustomerA", 10),
            order("2", "KitchenA", "CustomerA", 35),
        ];
        let graph = demo_graph();

        let strict = BatchAssignmentEngine::standard().assign(&orders, &graph).unwrap();
        assert_eq!(strict.rider_count(), 2);

        let relaxed = BatchAssignmentEngine::standard()
            .with_config(BatchingConfig::new().with_max_time_gap(30))
            .assign(&orders, &graph)
            .unwrap();
        assert_eq!(relaxed.rider_count(), 1);
    }

    #[test]
    fn test_nearby_kitchens_in_full_pass() {
        let orders = vec![
            order("1", "KitchenA", "CustomerA", 10),
            order("2", "KitchenB", "CustomerA", 15),
        ];
        let plan = BatchAssignmentEngine::standard()
            .assign(&orders, &demo_graph())
            .unwrap();

        assert_eq!(ids(&plan), vec![("Rider1", vec!["1", "2"])]);
        assert_eq!(
            plan.assignment_for_order("2").unwrap().reason,
            AssignmentReason::rule("NEARBY_KITCHENS", 2)
        );
    }

    #[test]
    fn test_pickup_on_the_way_in_full_pass() {
        // KitchenA/KitchenC proximity 2 fails NEARBY_KITCHENS; 2 + 5 fits the budget
        let orders = vec![
            order("1", "KitchenA", "CustomerA", 10),
            order("2", "KitchenC", "CustomerA", 15),
        ];
        let plan = BatchAssignmentEngine::standard()
            .assign(&orders, &demo_graph())
            .unwrap();

        assert_eq!(ids(&plan), vec![("Rider1", vec!["1", "2"])]);
        assert_eq!(
            plan.assignment_for_order("2").unwrap().reason,
            AssignmentReason::rule("PICKUP_ON_THE_WAY", 4)
        );
    }

    #[test]
    fn test_wrapped_proximity_batches_far_identifiers() {
        let mut graph = demo_graph();
        graph.add_vertex("");
        graph.add_vertex("polygenelubricants");
        // Customer proximity wraps to i32::MIN, which passes the <= 1 gate
        let orders = vec![
            order("1", "KitchenA", "", 10),
            order("2", "KitchenA", "polygenelubricants", 10),
        ];
        let plan = BatchAssignmentEngine::standard()
            .assign(&orders, &graph)
            .unwrap();

        assert_eq!(plan.rider_count(), 1);
        assert_eq!(
            plan.assignment_for_order("2").unwrap().reason,
            AssignmentReason::rule("NEARBY_DROPS", 3)
        );
    }

    #[test]
    fn test_default_matches_new() {
        assert!(BatchAssignmentEngine::default().rule_names().is_empty());
        assert_eq!(BatchAssignmentEngine::standard().rule_names().len(), 6);
    }

    #[test]
    fn test_debug_lists_rules() {
        let dbg = format!("{:?}", BatchAssignmentEngine::standard());
        assert!(dbg.contains("SAME_ROUTE"));
        assert!(dbg.contains("SHARED_KITCHEN_NEARBY_DROP"));
    }
}

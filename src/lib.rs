//! Greedy delivery-order batching.
//!
//! Assigns a stream of delivery orders to as few riders as practical using
//! proximity and timing heuristics instead of exact optimization.
//!
//! # Modules
//!
//! - **`graph`**: `LocationGraph` — registered locations, symmetric edge
//!   weights, and the identifier-hash proximity score
//! - **`models`**: Domain types — `Order`, `Rider`, `BatchPlan`, `BatchAssignment`
//! - **`batching`**: `BatchingRule` chain and the first-fit `BatchAssignmentEngine`
//! - **`optimizer`**: `DeliveryOptimizer` — graph + order queue façade
//! - **`validation`**: Pre-flight checks (duplicate order IDs, unknown locations)
//! - **`config`**: `BatchingConfig` thresholds
//! - **`error`**: Error type shared by graph and engine
//!
//! # Architecture
//!
//! The graph feeds the engine; the engine never mutates it. Each run owns
//! its rider list and hands it back by value inside a `BatchPlan`.

pub mod batching;
pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod optimizer;
pub mod validation;

pub use error::{Error, Result};

//! Undirected weighted location graph.
//!
//! Holds the registered pickup and drop-off locations together with the
//! symmetric travel cost between directly connected pairs. Two distance
//! notions are exposed and must not be confused:
//!
//! - [`LocationGraph::get_weight`]: the registered edge cost.
//! - [`LocationGraph::calculate_distance`]: a proximity score derived from
//!   identifier content alone. Batching rules only consult this one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Stable 32-bit hash of a location identifier.
///
/// Polynomial hash with multiplier 31 over UTF-16 code units, wrapping on
/// overflow. The batching thresholds were calibrated against this exact
/// function, so it must not be swapped for `std::hash`.
pub fn identifier_hash(id: &str) -> i32 {
    id.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Undirected graph of named locations with integer edge weights.
///
/// # Example
/// ```
/// use u_batch::graph::LocationGraph;
///
/// let mut graph = LocationGraph::new();
/// graph.add_vertex("KitchenA");
/// graph.add_vertex("CustomerA");
/// graph.add_edge("KitchenA", "CustomerA", 500).unwrap();
///
/// assert_eq!(graph.get_weight("CustomerA", "KitchenA").unwrap(), 500);
/// assert_eq!(graph.calculate_distance("KitchenA", "KitchenA"), 0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationGraph {
    adjacency: HashMap<String, HashMap<String, u64>>,
}

impl LocationGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a location. No-op if already present.
    pub fn add_vertex(&mut self, id: impl Into<String>) {
        self.adjacency.entry(id.into()).or_default();
    }

    /// Connects two registered locations, overwriting any previous weight
    /// in both directions.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: u64) -> Result<()> {
        self.require_vertex(a)?;
        self.require_vertex(b)?;

        if let Some(edges) = self.adjacency.get_mut(a) {
            edges.insert(b.to_string(), weight);
        }
        if let Some(edges) = self.adjacency.get_mut(b) {
            edges.insert(a.to_string(), weight);
        }
        Ok(())
    }

    /// Registered weight of the edge between `a` and `b`.
    pub fn get_weight(&self, a: &str, b: &str) -> Result<u64> {
        let edges = self
            .adjacency
            .get(a)
            .ok_or_else(|| Error::UnknownVertex(a.to_string()))?;

        edges.get(b).copied().ok_or_else(|| Error::NoSuchEdge {
            from: a.to_string(),
            to: b.to_string(),
        })
    }

    /// Heuristic proximity score between two identifiers.
    ///
    /// Absolute difference of [`identifier_hash`] values in wrapping 32-bit
    /// arithmetic: a difference that overflows wraps, and `|i32::MIN|`
    /// stays `i32::MIN`, so the score can be negative. Ignores edges, does
    /// no path search and never fails; unregistered identifiers are scored
    /// like any other string. Symmetric in its arguments.
    pub fn calculate_distance(&self, a: &str, b: &str) -> i32 {
        identifier_hash(a)
            .wrapping_sub(identifier_hash(b))
            .wrapping_abs()
    }

    /// Whether `id` is registered.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Fails with [`Error::UnknownVertex`] unless `id` is registered.
    pub fn require_vertex(&self, id: &str) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::UnknownVertex(id.to_string()))
        }
    }

    /// Directly connected locations and their weights.
    pub fn neighbors(&self, id: &str) -> Result<impl Iterator<Item = (&str, u64)>> {
        let edges = self
            .adjacency
            .get(id)
            .ok_or_else(|| Error::UnknownVertex(id.to_string()))?;
        Ok(edges.iter().map(|(to, &w)| (to.as_str(), w)))
    }

    /// Registered location identifiers (unordered).
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of registered locations.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (self-loops count once).
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| edges.keys().map(move |to| (from, to)))
            .filter(|(from, to)| from <= to)
            .count()
    }
}

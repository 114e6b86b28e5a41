//! The road graph the planner searches.
//!
//! A `RoadGraph` is a directed graph of nodes (cities, junctions) joined
//! by one-way roads with a length in kilometres. Each node also carries a
//! transfer delay in minutes, charged when a traveller passes through it.
//! Graphs are immutable once built; "what if this road were closed"
//! questions are answered by deriving a variant with [`RoadGraph::without_road`].

use std::collections::{BTreeMap, HashMap};

use crate::domain::NodeId;

mod builder;

pub use builder::{GraphBuildError, GraphBuilder};

/// Error returned when a lookup names a node the graph does not contain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node: {0}")]
pub struct UnknownNode(pub NodeId);

/// Per-node data: the transfer delay and the outgoing roads.
///
/// Roads are kept sorted by destination so searches visit neighbors in
/// a stable order and equal-cost ties resolve the same way every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct NodeRecord {
    pub(crate) delay_mins: f64,
    /// Outgoing roads, keyed by destination, valued by length in km.
    pub(crate) roads: BTreeMap<NodeId, f64>,
}

/// A directed road graph with per-node transfer delays.
///
/// Roads are one-way: a road from `A` to `B` says nothing about travel
/// from `B` to `A`. Zero-length roads are legal and distinct from absent
/// ones.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadGraph {
    nodes: HashMap<NodeId, NodeRecord>,
}

impl RoadGraph {
    pub(crate) fn from_records(nodes: HashMap<NodeId, NodeRecord>) -> Self {
        Self { nodes }
    }

    /// Returns true if the graph contains `node`.
    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Returns the transfer delay of `node` in minutes.
    pub fn delay_mins(&self, node: &NodeId) -> Result<f64, UnknownNode> {
        self.nodes
            .get(node)
            .map(|record| record.delay_mins)
            .ok_or_else(|| UnknownNode(node.clone()))
    }

    /// Returns the outgoing roads of `node`, keyed by destination.
    pub fn neighbors(&self, node: &NodeId) -> Result<&BTreeMap<NodeId, f64>, UnknownNode> {
        self.nodes
            .get(node)
            .map(|record| &record.roads)
            .ok_or_else(|| UnknownNode(node.clone()))
    }

    /// Returns the length of the direct road from `from` to `to` in km,
    /// or `None` if no such road exists.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either endpoint is not a node of the graph.
    pub fn distance_km(&self, from: &NodeId, to: &NodeId) -> Result<Option<f64>, UnknownNode> {
        if !self.contains(to) {
            return Err(UnknownNode(to.clone()));
        }
        Ok(self.neighbors(from)?.get(to).copied())
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of directed roads.
    pub fn road_count(&self) -> usize {
        self.nodes.values().map(|record| record.roads.len()).sum()
    }

    /// Returns every node with its transfer delay, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, f64)> {
        self.nodes
            .iter()
            .map(|(id, record)| (id, record.delay_mins))
    }

    /// Returns every directed road as `(from, to, km)`, in no particular
    /// order.
    pub fn roads(&self) -> impl Iterator<Item = (&NodeId, &NodeId, f64)> {
        self.nodes.iter().flat_map(|(from, record)| {
            record.roads.iter().map(move |(to, km)| (from, to, *km))
        })
    }

    /// Returns a copy of the graph with the road from `from` to `to`
    /// removed.
    ///
    /// The copy is always derived from `self`, so removals never
    /// accumulate across calls. Asking to remove a road that does not
    /// exist yields an unchanged copy. Nodes are never removed, so the
    /// variant answers lookups for exactly the same ids as the original.
    pub fn without_road(&self, from: &NodeId, to: &NodeId) -> RoadGraph {
        let mut variant = self.clone();
        if let Some(record) = variant.nodes.get_mut(from) {
            record.roads.remove(to);
        }
        variant
    }
}

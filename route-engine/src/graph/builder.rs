//! Fluent construction of road graphs from raw ingestion data.

use std::collections::HashMap;

use crate::domain::{InvalidNodeId, NodeId};

use super::{NodeRecord, RoadGraph};

/// Error returned when the declared nodes or roads are invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphBuildError {
    /// A node or road endpoint had an unparseable identifier.
    #[error("invalid node id {id:?}: {source}")]
    InvalidId {
        id: String,
        source: InvalidNodeId,
    },
    /// A transfer delay was negative or not finite.
    #[error("node {node} has invalid transfer delay {delay_mins}")]
    InvalidDelay { node: NodeId, delay_mins: f64 },
    /// A road length was not finite.
    #[error("road {from} -> {to} has non-finite length {distance_km}")]
    InvalidDistance {
        from: NodeId,
        to: NodeId,
        distance_km: f64,
    },
}

/// Builder for creating road graphs.
///
/// Provides a fluent API over the raw strings and numbers an ingestion
/// layer produces. Declarations are collected as-is and validated in
/// [`GraphBuilder::build`], so declaration order does not matter: a road
/// may name a node that is only declared later, or never, in which case
/// its endpoints are registered with a zero transfer delay.
///
/// A negative road length is the ingestion convention for "no road
/// here" and is skipped rather than materialized; a zero length is a
/// real road of zero kilometres.
///
/// # Examples
///
/// ```
/// use route_engine::graph::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .node("Lyon", 4.0)
///     .road("Lyon", "Paris", 465.0)
///     .road("Paris", "Lyon", 465.0)
///     .road("Lyon", "Nice", -1.0) // no direct road
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.road_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<(String, f64)>,
    roads: Vec<(String, String, f64)>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node with its transfer delay in minutes.
    ///
    /// Declaring the same node again overwrites the earlier delay.
    pub fn node(mut self, id: &str, delay_mins: f64) -> Self {
        self.nodes.push((id.to_owned(), delay_mins));
        self
    }

    /// Declares a one-way road of `distance_km` kilometres.
    ///
    /// Declaring the same road again overwrites the earlier length.
    pub fn road(mut self, from: &str, to: &str, distance_km: f64) -> Self {
        self.roads.push((from.to_owned(), to.to_owned(), distance_km));
        self
    }

    /// Validates the declarations and builds the graph.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - any identifier fails to parse as a [`NodeId`]
    /// - any transfer delay is negative or not finite
    /// - any road length is not finite
    pub fn build(self) -> Result<RoadGraph, GraphBuildError> {
        let mut records: HashMap<NodeId, NodeRecord> = HashMap::new();

        for (raw_id, delay_mins) in &self.nodes {
            let id = parse_id(raw_id)?;
            if !delay_mins.is_finite() || *delay_mins < 0.0 {
                return Err(GraphBuildError::InvalidDelay {
                    node: id,
                    delay_mins: *delay_mins,
                });
            }
            records.entry(id).or_default().delay_mins = *delay_mins;
        }

        for (raw_from, raw_to, distance_km) in &self.roads {
            let from = parse_id(raw_from)?;
            let to = parse_id(raw_to)?;
            if *distance_km < 0.0 {
                // ingestion sentinel for "no road here"
                continue;
            }
            if !distance_km.is_finite() {
                return Err(GraphBuildError::InvalidDistance {
                    from,
                    to,
                    distance_km: *distance_km,
                });
            }
            records.entry(to.clone()).or_default();
            records
                .entry(from)
                .or_default()
                .roads
                .insert(to, *distance_km);
        }

        Ok(RoadGraph::from_records(records))
    }
}

fn parse_id(raw: &str) -> Result<NodeId, GraphBuildError> {
    NodeId::parse(raw).map_err(|source| GraphBuildError::InvalidId {
        id: raw.to_owned(),
        source,
    })
}

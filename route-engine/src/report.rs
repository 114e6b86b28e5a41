//! Serializable views of graphs and planning results.
//!
//! The planner deals in domain types; rendering and transport live in
//! other programs. This module flattens those types into plain
//! serde-serializable structs a front end can consume directly.

use serde::Serialize;

use crate::domain::{Candidate, Route};
use crate::graph::RoadGraph;
use crate::planner::PlanResult;

/// A scored route in a plan summary.
#[derive(Debug, Serialize)]
pub struct CandidateSummary {
    /// Stops along the route, origin first.
    pub stops: Vec<String>,

    /// Total travel plus transfer time in minutes.
    pub total_time_mins: f64,

    /// Total length in kilometres.
    pub total_distance_km: f64,
}

/// The reportable outcome of a planning run.
#[derive(Debug, Serialize)]
pub struct PlanSummary {
    /// Best candidates, best first.
    pub candidates: Vec<CandidateSummary>,

    /// Number of single-road exclusions explored for alternates.
    pub roads_excluded: usize,
}

/// A node of the road graph.
#[derive(Debug, Serialize)]
pub struct NodeView {
    /// Node identifier.
    pub id: String,

    /// Transfer delay in minutes.
    pub delay_mins: f64,
}

/// A directed road of the graph.
#[derive(Debug, Serialize)]
pub struct RoadView {
    /// Origin node id.
    pub from: String,

    /// Destination node id.
    pub to: String,

    /// Road length in kilometres.
    pub distance_km: f64,
}

/// A whole graph together with one route to highlight.
///
/// Nodes and roads are sorted by id so the output is stable across
/// runs.
#[derive(Debug, Serialize)]
pub struct GraphView {
    /// Every node of the graph, sorted by id.
    pub nodes: Vec<NodeView>,

    /// Every directed road, sorted by origin then destination.
    pub roads: Vec<RoadView>,

    /// Stops of the highlighted route, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<String>>,
}

// Conversion implementations

impl CandidateSummary {
    /// Create from a scored candidate.
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            stops: stop_ids(candidate.route()),
            total_time_mins: candidate.total_time_mins(),
            total_distance_km: candidate.total_distance_km(),
        }
    }
}

impl PlanSummary {
    /// Create from a plan result, keeping at most `max_results`
    /// candidates.
    pub fn from_result(result: &PlanResult, max_results: usize) -> Self {
        let candidates = result
            .top(max_results)
            .iter()
            .map(CandidateSummary::from_candidate)
            .collect();

        Self {
            candidates,
            roads_excluded: result.roads_excluded,
        }
    }
}

impl GraphView {
    /// Create a snapshot of `graph`, optionally highlighting `route`.
    pub fn from_graph(graph: &RoadGraph, route: Option<&Route>) -> Self {
        let mut nodes: Vec<NodeView> = graph
            .nodes()
            .map(|(id, delay_mins)| NodeView {
                id: id.as_str().to_owned(),
                delay_mins,
            })
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut roads: Vec<RoadView> = graph
            .roads()
            .map(|(from, to, distance_km)| RoadView {
                from: from.as_str().to_owned(),
                to: to.as_str().to_owned(),
                distance_km,
            })
            .collect();
        roads.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));

        Self {
            nodes,
            roads,
            route: route.map(stop_ids),
        }
    }
}

fn stop_ids(route: &Route) -> Vec<String> {
    route
        .stops()
        .iter()
        .map(|stop| stop.as_str().to_owned())
        .collect()
}

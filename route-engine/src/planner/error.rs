//! Planner error types.

use crate::domain::NodeId;
use crate::graph::UnknownNode;

/// Error from route planning.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// The request itself was malformed.
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),

    /// A requested waypoint is not a node of the graph.
    #[error("waypoint {0} is not a node of the graph")]
    InvalidWaypoint(NodeId),

    /// No route exists between two consecutive waypoints.
    #[error("no route from {from} to {to}")]
    RouteNotFound { from: NodeId, to: NodeId },

    /// A lookup named a node the graph does not contain.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// A route was scored against a graph missing one of its roads.
    #[error("route uses a road {from} -> {to} the graph does not have")]
    MissingRoad { from: NodeId, to: NodeId },
}

impl From<UnknownNode> for PlanError {
    fn from(err: UnknownNode) -> Self {
        PlanError::UnknownNode(err.0)
    }
}

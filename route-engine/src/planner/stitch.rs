//! Stitching legs into a full route.
//!
//! A request names an ordered chain of required stops. Each consecutive
//! pair is searched independently and the legs are concatenated into a
//! single route. Legs exclude their origin, so the stitched route names
//! every stop exactly once per visit, starting at the first waypoint.

use tracing::trace;

use crate::domain::{NodeId, Route};
use crate::graph::RoadGraph;

use super::error::PlanError;
use super::leg::find_leg;

/// Builds the fastest route visiting `waypoints` in the given order.
///
/// Adjacent duplicate waypoints produce an empty leg; a waypoint chain
/// may legitimately revisit a stop (`A -> B -> A`). Every waypoint is
/// validated against the graph before any search runs, so an invalid
/// waypoint is reported even when an earlier leg would have failed
/// first.
///
/// # Errors
///
/// Returns `Err` if fewer than two waypoints are given, if a waypoint
/// is not a node of the graph, or if some leg has no path.
pub fn build_route(
    graph: &RoadGraph,
    waypoints: &[NodeId],
    speed_kph: f64,
) -> Result<Route, PlanError> {
    if waypoints.len() < 2 {
        return Err(PlanError::InvalidRequest(
            "at least two waypoints are required".to_string(),
        ));
    }

    for waypoint in waypoints {
        if !graph.contains(waypoint) {
            return Err(PlanError::InvalidWaypoint(waypoint.clone()));
        }
    }

    let mut stitched = Vec::new();
    for pair in waypoints.windows(2) {
        let leg = find_leg(graph, &pair[0], &pair[1], speed_kph)?;
        trace!(from = %pair[0], to = %pair[1], stops = leg.len(), "stitched leg");
        stitched.extend(leg);
    }

    Ok(Route::from_origin(waypoints[0].clone(), stitched))
}

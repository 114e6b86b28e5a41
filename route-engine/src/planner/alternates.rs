//! Alternate route discovery.
//!
//! Alternates answer "what if a road on the best route were closed":
//! for each road the best route uses, the whole waypoint chain is
//! re-planned against a variant graph with that one road removed. Each
//! variant is derived fresh from the canonical graph, so exclusions
//! never stack. Exclusions are independent, so they run in parallel;
//! results are merged back in route order to keep the pool stable.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::domain::{Candidate, NodeId, Route};
use crate::graph::RoadGraph;

use super::error::PlanError;
use super::metrics::evaluate_route;
use super::rank::CandidatePool;
use super::stitch::build_route;

/// Explores alternates to `best_route` and returns the ranked pool.
///
/// The pool is seeded with `best_route` itself, scored against the
/// canonical graph. A road whose removal leaves some leg without a path
/// (or a waypoint unreachable) simply yields no candidate; genuine
/// lookup failures still propagate.
///
/// # Errors
///
/// Returns `Err` if `best_route` cannot be scored against `graph`, or
/// if re-planning fails for a reason other than a missing path.
pub fn explore_alternates(
    graph: &RoadGraph,
    best_route: &Route,
    waypoints: &[NodeId],
    speed_kph: f64,
) -> Result<CandidatePool, PlanError> {
    let seed = evaluate_route(graph, best_route, speed_kph)?;

    let mut pool = CandidatePool::new();
    pool.push(Candidate::new(
        best_route.clone(),
        seed.total_time_mins,
        seed.total_distance_km,
    ));

    let roads: Vec<(NodeId, NodeId)> = best_route
        .roads()
        .map(|(from, to)| (from.clone(), to.clone()))
        .collect();

    // Indexed parallel map keeps outcomes in route order.
    let outcomes: Vec<Result<Option<Candidate>, PlanError>> = roads
        .par_iter()
        .map(|(from, to)| alternate_without_road(graph, waypoints, speed_kph, from, to))
        .collect();

    for outcome in outcomes {
        if let Some(candidate) = outcome? {
            pool.push(candidate);
        }
    }

    Ok(pool)
}

/// Re-plans the waypoint chain with one road removed.
///
/// Returns `Ok(None)` when the removal disconnects the chain.
fn alternate_without_road(
    graph: &RoadGraph,
    waypoints: &[NodeId],
    speed_kph: f64,
    from: &NodeId,
    to: &NodeId,
) -> Result<Option<Candidate>, PlanError> {
    let variant = graph.without_road(from, to);
    trace!(excluded_from = %from, excluded_to = %to, "re-planning without road");

    let route = match build_route(&variant, waypoints, speed_kph) {
        Ok(route) => route,
        Err(err @ (PlanError::RouteNotFound { .. } | PlanError::InvalidWaypoint(_))) => {
            debug!(
                excluded_from = %from,
                excluded_to = %to,
                error = %err,
                "no alternate without this road"
            );
            return Ok(None);
        }
        Err(other) => return Err(other),
    };

    // Score against the variant the route was found in.
    let metrics = evaluate_route(&variant, &route, speed_kph)?;
    Ok(Some(Candidate::new(
        route,
        metrics.total_time_mins,
        metrics.total_distance_km,
    )))
}

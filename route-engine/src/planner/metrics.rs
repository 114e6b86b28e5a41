//! Whole-route scoring.
//!
//! Scores a fully expanded route against a graph: total distance over
//! its roads and total travel time including transfer delays. Unlike
//! the per-leg search, which exempts each leg's endpoints, scoring
//! charges the delay of **every** intermediate stop. Waypoints inside
//! the route are real stops for the traveller, so their delays count;
//! only the route's own endpoints ride free.

use crate::domain::{NodeId, Route};
use crate::graph::RoadGraph;

use super::error::PlanError;

/// Converts a road length to travel time at the given average speed.
///
/// time (mins) = distance (km) / speed (km/h) * 60
pub(crate) fn travel_mins(distance_km: f64, speed_kph: f64) -> f64 {
    distance_km / speed_kph * 60.0
}

/// Totals for a scored route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMetrics {
    /// Total travel time in minutes, transfer delays included.
    pub total_time_mins: f64,

    /// Total distance in kilometres.
    pub total_distance_km: f64,
}

/// Scores `route` against `graph` at the given average speed.
///
/// Every consecutive pair of stops must be joined by a road in `graph`.
/// A route is always scored against the graph it was found in; scoring
/// it against a different variant surfaces the mismatch as
/// [`PlanError::MissingRoad`] rather than silently mispricing it.
///
/// # Errors
///
/// Returns `Err` if a stop is not a node of the graph, or if two
/// consecutive stops have no direct road between them.
pub fn evaluate_route(
    graph: &RoadGraph,
    route: &Route,
    speed_kph: f64,
) -> Result<RouteMetrics, PlanError> {
    let mut total_time_mins = 0.0;
    let mut total_distance_km = 0.0;

    for (from, to) in route.roads() {
        let distance_km =
            graph
                .distance_km(from, to)?
                .ok_or_else(|| PlanError::MissingRoad {
                    from: from.clone(),
                    to: to.clone(),
                })?;
        total_distance_km += distance_km;
        total_time_mins += travel_mins(distance_km, speed_kph);
    }

    for stop in route.intermediate_stops() {
        total_time_mins += graph.delay_mins(stop)?;
    }

    Ok(RouteMetrics {
        total_time_mins,
        total_distance_km,
    })
}

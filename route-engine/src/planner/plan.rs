//! Planning facade tying search, stitching, scoring and alternates
//! together.

use tracing::debug;

use crate::domain::{Candidate, NodeId};
use crate::graph::RoadGraph;

use super::alternates::explore_alternates;
use super::config::PlanConfig;
use super::error::PlanError;
use super::rank::CandidatePool;
use super::stitch::build_route;

/// Request for route planning.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// The stops the route must visit, in order. At least two.
    pub waypoints: Vec<NodeId>,

    /// Average travel speed in km/h. `None` falls back to
    /// [`PlanConfig::default_speed_kph`].
    pub speed_kph: Option<f64>,
}

impl PlanRequest {
    /// Create a request planned at the configured default speed.
    pub fn new(waypoints: Vec<NodeId>) -> Self {
        Self {
            waypoints,
            speed_kph: None,
        }
    }

    /// Create a request with an explicit average speed.
    pub fn with_speed(waypoints: Vec<NodeId>, speed_kph: f64) -> Self {
        Self {
            waypoints,
            speed_kph: Some(speed_kph),
        }
    }
}

/// Result of route planning.
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// Every discovered candidate, ranked best-first. Never empty for a
    /// result returned by [`Planner::plan`]: the best route seeds it.
    pub candidates: CandidatePool,

    /// Number of single-road exclusions explored for alternates.
    pub roads_excluded: usize,
}

impl PlanResult {
    /// Returns the best-ranked candidate.
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.best()
    }

    /// Returns the best `n` candidates.
    pub fn top(&self, n: usize) -> &[Candidate] {
        self.candidates.top(n)
    }
}

/// Route planner over a road graph.
///
/// # Examples
///
/// ```
/// use route_engine::domain::NodeId;
/// use route_engine::graph::GraphBuilder;
/// use route_engine::planner::{PlanConfig, Planner, PlanRequest};
///
/// let graph = GraphBuilder::new()
///     .node("B", 2.0)
///     .road("A", "B", 10.0)
///     .road("B", "C", 20.0)
///     .road("A", "C", 50.0)
///     .build()
///     .unwrap();
///
/// let config = PlanConfig::default();
/// let planner = Planner::new(&graph, &config);
///
/// let waypoints = vec![
///     NodeId::parse("A").unwrap(),
///     NodeId::parse("C").unwrap(),
/// ];
/// let result = planner.plan(&PlanRequest::with_speed(waypoints, 60.0)).unwrap();
///
/// let best = result.best().unwrap();
/// assert_eq!(best.route().to_string(), "A -> B -> C");
/// assert_eq!(best.total_time_mins(), 32.0);
/// ```
pub struct Planner<'a> {
    graph: &'a RoadGraph,
    config: &'a PlanConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a RoadGraph, config: &'a PlanConfig) -> Self {
        Self { graph, config }
    }

    /// Plans the best route through the requested waypoints and
    /// explores its alternates.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the request is malformed, a waypoint is not a
    /// node of the graph, or some pair of consecutive waypoints has no
    /// connecting path.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanResult, PlanError> {
        let speed_kph = self.validate(request)?;

        let best = build_route(self.graph, &request.waypoints, speed_kph)?;
        let roads_excluded = best.road_count();
        let candidates = explore_alternates(self.graph, &best, &request.waypoints, speed_kph)?;

        debug!(
            waypoints = request.waypoints.len(),
            candidates = candidates.len(),
            roads_excluded,
            "route planning complete"
        );

        Ok(PlanResult {
            candidates,
            roads_excluded,
        })
    }

    /// Validates the request and resolves the effective speed.
    fn validate(&self, request: &PlanRequest) -> Result<f64, PlanError> {
        if request.waypoints.len() < 2 {
            return Err(PlanError::InvalidRequest(
                "at least two waypoints are required".to_string(),
            ));
        }

        let speed_kph = request.speed_kph.unwrap_or(self.config.default_speed_kph);
        if !speed_kph.is_finite() || speed_kph <= 0.0 {
            return Err(PlanError::InvalidRequest(format!(
                "average speed must be a positive number of km/h, got {speed_kph}"
            )));
        }

        Ok(speed_kph)
    }
}

//! Route planner over the road graph.
//!
//! This module implements the core planning pipeline that answers:
//! "what is the fastest way to drive through these stops, in order,
//! and what are the next-best choices?"
//!
//! The pipeline searches each consecutive pair of waypoints with
//! Dijkstra, stitches the legs into one route, scores it, then
//! re-plans with each road of the best route excluded in turn to
//! collect ranked alternates.

mod alternates;
mod config;
mod error;
mod leg;
mod metrics;
mod plan;
mod rank;
mod stitch;

pub use alternates::explore_alternates;
pub use config::PlanConfig;
pub use error::PlanError;
pub use leg::find_leg;
pub use metrics::{RouteMetrics, evaluate_route};
pub use plan::{PlanRequest, PlanResult, Planner};
pub use rank::CandidatePool;
pub use stitch::build_route;

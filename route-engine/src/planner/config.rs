//! Planner configuration.

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Average travel speed assumed when a request does not carry one
    /// (kilometres per hour).
    pub default_speed_kph: f64,

    /// Maximum number of ranked candidates to surface in reports.
    pub max_results: usize,
}

impl PlanConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(default_speed_kph: f64, max_results: usize) -> Self {
        Self {
            default_speed_kph,
            max_results,
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            default_speed_kph: 100.0,
            max_results: 2,
        }
    }
}

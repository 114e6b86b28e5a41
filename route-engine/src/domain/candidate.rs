//! Scored route candidates.

use std::cmp::Ordering;

use super::Route;

/// A route together with its whole-route metrics.
///
/// Candidates are what the planner hands to reporting: the expanded stop
/// sequence plus the total travel time and distance it was scored with.
/// Ranking is by travel time first, then distance as the tie-breaker;
/// see [`Candidate::rank_cmp`].
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    route: Route,
    total_time_mins: f64,
    total_distance_km: f64,
}

impl Candidate {
    /// Creates a candidate from a route and its metrics.
    pub fn new(route: Route, total_time_mins: f64, total_distance_km: f64) -> Self {
        Self {
            route,
            total_time_mins,
            total_distance_km,
        }
    }

    /// Returns the route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns the total travel time in minutes, transfer delays included.
    pub fn total_time_mins(&self) -> f64 {
        self.total_time_mins
    }

    /// Returns the total distance in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Compares two candidates by rank: lower total time first, with
    /// lower total distance breaking ties.
    ///
    /// Uses [`f64::total_cmp`], so the ordering is total even for the
    /// non-finite values a degenerate graph could produce.
    pub fn rank_cmp(&self, other: &Candidate) -> Ordering {
        self.total_time_mins
            .total_cmp(&other.total_time_mins)
            .then_with(|| self.total_distance_km.total_cmp(&other.total_distance_km))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeId;

    fn candidate(time: f64, distance: f64) -> Candidate {
        let route = Route::new(vec![NodeId::parse("A").unwrap()]).unwrap();
        Candidate::new(route, time, distance)
    }

    #[test]
    fn faster_ranks_first() {
        let fast = candidate(10.0, 100.0);
        let slow = candidate(20.0, 1.0);
        assert_eq!(fast.rank_cmp(&slow), Ordering::Less);
        assert_eq!(slow.rank_cmp(&fast), Ordering::Greater);
    }

    #[test]
    fn distance_breaks_time_ties() {
        let short = candidate(10.0, 5.0);
        let long = candidate(10.0, 8.0);
        assert_eq!(short.rank_cmp(&long), Ordering::Less);
    }

    #[test]
    fn identical_metrics_compare_equal() {
        let a = candidate(10.0, 5.0);
        let b = candidate(10.0, 5.0);
        assert_eq!(a.rank_cmp(&b), Ordering::Equal);
    }

    #[test]
    fn accessors() {
        let c = candidate(42.5, 17.25);
        assert_eq!(c.total_time_mins(), 42.5);
        assert_eq!(c.total_distance_km(), 17.25);
        assert_eq!(c.route().stop_count(), 1);
    }
}

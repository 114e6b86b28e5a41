//! Route types.
//!
//! A `Route` is the fully expanded sequence of stops a traveller passes
//! through, including every intermediate node the search inserted between
//! the requested waypoints.

use std::fmt;

use super::NodeId;

/// Error returned when constructing a route with no stops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("a route must contain at least its origin")]
pub struct EmptyRoute;

/// An ordered, non-empty sequence of stops through the road graph.
///
/// Consecutive stops are expected to be joined by a road, but the route
/// itself does not hold distances or times; it is scored against a
/// graph by the planner.
///
/// # Invariants
///
/// - At least one stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<NodeId>,
}

impl Route {
    /// Constructs a route from an ordered list of stops.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_engine::domain::{NodeId, Route};
    ///
    /// let stops = ["A", "B", "C"]
    ///     .iter()
    ///     .map(|s| NodeId::parse(s).unwrap())
    ///     .collect();
    /// let route = Route::new(stops).unwrap();
    ///
    /// assert_eq!(route.stop_count(), 3);
    /// assert_eq!(route.to_string(), "A -> B -> C");
    /// ```
    pub fn new(stops: Vec<NodeId>) -> Result<Self, EmptyRoute> {
        if stops.is_empty() {
            return Err(EmptyRoute);
        }

        Ok(Route { stops })
    }

    /// Constructs a route from its origin followed by the remaining stops.
    ///
    /// Unlike [`Route::new`] this cannot fail: the origin guarantees the
    /// route is non-empty.
    pub fn from_origin(origin: NodeId, rest: impl IntoIterator<Item = NodeId>) -> Self {
        let mut stops = vec![origin];
        stops.extend(rest);
        Route { stops }
    }

    /// Returns all stops in order.
    pub fn stops(&self) -> &[NodeId] {
        &self.stops
    }

    /// Returns the first stop.
    pub fn origin(&self) -> &NodeId {
        // Safe: validated non-empty at construction
        self.stops.first().unwrap()
    }

    /// Returns the last stop.
    ///
    /// For a single-stop route this is the origin.
    pub fn destination(&self) -> &NodeId {
        // Safe: validated non-empty at construction
        self.stops.last().unwrap()
    }

    /// Returns the stops strictly between origin and destination.
    ///
    /// These are the stops where a traveller transfers, so they are the
    /// ones a transfer delay applies to.
    pub fn intermediate_stops(&self) -> &[NodeId] {
        if self.stops.len() <= 2 {
            &[]
        } else {
            &self.stops[1..self.stops.len() - 1]
        }
    }

    /// Returns each consecutive pair of stops, one per road travelled.
    pub fn roads(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.stops.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Returns the number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Returns the number of roads travelled (stops - 1, or 0 for a
    /// single-stop route).
    pub fn road_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(stop.as_str())?;
        }
        Ok(())
    }
}

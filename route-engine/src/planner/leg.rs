//! Shortest-time search for a single leg between two required stops.
//!
//! A leg is the fastest path from one waypoint to the next. Travel cost
//! is time: road length divided by the average speed, plus the transfer
//! delay of each node passed through. The leg's own endpoints are exempt
//! from delay here; whole-route scoring charges every intermediate stop
//! instead, so a waypoint is only free when the whole route starts or
//! ends there.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::domain::NodeId;
use crate::graph::{RoadGraph, UnknownNode};

use super::error::PlanError;
use super::metrics::travel_mins;

/// Heap entry: the best known time to reach `node` when it was pushed.
struct Frontier {
    elapsed_mins: f64,
    /// Monotonic push counter. Among equal times the earliest push wins,
    /// so exploration order does not depend on heap internals.
    seq: u64,
    node: NodeId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap and we want
        // the smallest time (then the earliest push) on top.
        other
            .elapsed_mins
            .total_cmp(&self.elapsed_mins)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Finds the fastest leg from `origin` to `destination`.
///
/// Returns the stops of the leg **excluding** `origin`, so consecutive
/// legs concatenate without repeating the shared waypoint. When `origin`
/// equals `destination` the leg is empty.
///
/// # Errors
///
/// Returns `Err` if either endpoint is not a node of the graph, or if
/// no path connects them.
pub fn find_leg(
    graph: &RoadGraph,
    origin: &NodeId,
    destination: &NodeId,
    speed_kph: f64,
) -> Result<Vec<NodeId>, PlanError> {
    if !graph.contains(origin) {
        return Err(UnknownNode(origin.clone()).into());
    }
    if !graph.contains(destination) {
        return Err(UnknownNode(destination.clone()).into());
    }

    let mut best: HashMap<NodeId, f64> = HashMap::with_capacity(graph.node_count());
    let mut previous: HashMap<NodeId, NodeId> = HashMap::with_capacity(graph.node_count());
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    best.insert(origin.clone(), 0.0);
    frontier.push(Frontier {
        elapsed_mins: 0.0,
        seq,
        node: origin.clone(),
    });

    let mut reached = false;
    while let Some(Frontier {
        elapsed_mins, node, ..
    }) = frontier.pop()
    {
        if node == *destination {
            reached = true;
            break;
        }

        // A cheaper entry for this node was already processed.
        if best.get(&node).is_some_and(|&known| elapsed_mins > known) {
            continue;
        }

        // Transfer delay is charged when moving on from a stop, except
        // at the leg's own endpoints.
        let delay_mins = if node == *origin || node == *destination {
            0.0
        } else {
            graph.delay_mins(&node)?
        };

        for (neighbor, &distance_km) in graph.neighbors(&node)? {
            let reach_mins = elapsed_mins + travel_mins(distance_km, speed_kph) + delay_mins;
            let improves = best
                .get(neighbor)
                .is_none_or(|&known| reach_mins < known);
            if improves {
                best.insert(neighbor.clone(), reach_mins);
                previous.insert(neighbor.clone(), node.clone());
                seq += 1;
                frontier.push(Frontier {
                    elapsed_mins: reach_mins,
                    seq,
                    node: neighbor.clone(),
                });
            }
        }
    }

    if !reached {
        return Err(PlanError::RouteNotFound {
            from: origin.clone(),
            to: destination.clone(),
        });
    }

    // Walk the backpointers from the destination to the origin.
    let mut stops = Vec::new();
    let mut cursor = destination.clone();
    while cursor != *origin {
        let prev = previous
            .get(&cursor)
            .cloned()
            .ok_or_else(|| PlanError::RouteNotFound {
                from: origin.clone(),
                to: destination.clone(),
            })?;
        stops.push(cursor);
        cursor = prev;
    }
    stops.reverse();

    Ok(stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn node(s: &str) -> NodeId {
        NodeId::parse(s).unwrap()
    }

    fn stops(names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|s| node(s)).collect()
    }

    #[test]
    fn chain_is_followed() {
        let graph = GraphBuilder::new()
            .road("A", "B", 10.0)
            .road("B", "C", 10.0)
            .build()
            .unwrap();

        let leg = find_leg(&graph, &node("A"), &node("C"), 60.0).unwrap();
        assert_eq!(leg, stops(&["B", "C"]));
    }

    #[test]
    fn leg_excludes_origin() {
        let graph = GraphBuilder::new().road("A", "B", 10.0).build().unwrap();

        let leg = find_leg(&graph, &node("A"), &node("B"), 60.0).unwrap();
        assert_eq!(leg, stops(&["B"]));
    }

    #[test]
    fn same_origin_and_destination_is_empty() {
        let graph = GraphBuilder::new().road("A", "B", 10.0).build().unwrap();

        let leg = find_leg(&graph, &node("A"), &node("A"), 60.0).unwrap();
        assert!(leg.is_empty());
    }

    #[test]
    fn prefers_faster_multi_hop_over_direct() {
        // Direct is 50 km; the two-hop way is 30 km total.
        let graph = GraphBuilder::new()
            .road("A", "C", 50.0)
            .road("A", "B", 10.0)
            .road("B", "C", 20.0)
            .build()
            .unwrap();

        let leg = find_leg(&graph, &node("A"), &node("C"), 60.0).unwrap();
        assert_eq!(leg, stops(&["B", "C"]));
    }

    #[test]
    fn intermediate_delay_is_charged() {
        // Via B: 30 km plus a 25-minute delay at B. Direct: 50 km.
        // At 60 km/h the direct road (50 mins) beats the detour (55).
        let graph = GraphBuilder::new()
            .node("B", 25.0)
            .road("A", "C", 50.0)
            .road("A", "B", 10.0)
            .road("B", "C", 20.0)
            .build()
            .unwrap();

        let leg = find_leg(&graph, &node("A"), &node("C"), 60.0).unwrap();
        assert_eq!(leg, stops(&["C"]));
    }

    #[test]
    fn endpoint_delays_are_exempt() {
        // Heavy delays at A and C must not affect a leg from A to C.
        let graph = GraphBuilder::new()
            .node("A", 500.0)
            .node("C", 500.0)
            .road("A", "B", 10.0)
            .road("B", "C", 10.0)
            .road("A", "C", 15.0)
            .build()
            .unwrap();

        // 20 km via B beats 15 km direct only if B is delay-free; it is
        // not the endpoints that decide.
        let leg = find_leg(&graph, &node("A"), &node("C"), 60.0).unwrap();
        assert_eq!(leg, stops(&["C"]));
    }

    #[test]
    fn speed_flips_the_choice() {
        // Via B: 30 km + 2 mins delay at B. Direct: 50 km.
        let graph = GraphBuilder::new()
            .node("B", 2.0)
            .road("A", "C", 50.0)
            .road("A", "B", 10.0)
            .road("B", "C", 20.0)
            .build()
            .unwrap();

        // At 60 km/h the detour wins: 30 + 2 = 32 vs 50 mins.
        let slow = find_leg(&graph, &node("A"), &node("C"), 60.0).unwrap();
        assert_eq!(slow, stops(&["B", "C"]));

        // At 1500 km/h travel time shrinks and the fixed delay
        // dominates: 1.2 + 2 = 3.2 vs 2 mins direct.
        let fast = find_leg(&graph, &node("A"), &node("C"), 1500.0).unwrap();
        assert_eq!(fast, stops(&["C"]));
    }

    #[test]
    fn one_way_roads_are_respected() {
        let graph = GraphBuilder::new().road("A", "B", 10.0).build().unwrap();

        let err = find_leg(&graph, &node("B"), &node("A"), 60.0).unwrap_err();
        assert!(matches!(err, PlanError::RouteNotFound { from, to }
            if from == node("B") && to == node("A")));
    }

    #[test]
    fn unreachable_destination_is_an_error() {
        let graph = GraphBuilder::new()
            .road("A", "B", 10.0)
            .road("C", "D", 10.0)
            .build()
            .unwrap();

        let err = find_leg(&graph, &node("A"), &node("D"), 60.0).unwrap_err();
        assert!(matches!(err, PlanError::RouteNotFound { .. }));
    }

    #[test]
    fn unknown_endpoints_are_errors() {
        let graph = GraphBuilder::new().road("A", "B", 10.0).build().unwrap();

        let err = find_leg(&graph, &node("X"), &node("B"), 60.0).unwrap_err();
        assert!(matches!(err, PlanError::UnknownNode(n) if n == node("X")));

        let err = find_leg(&graph, &node("A"), &node("X"), 60.0).unwrap_err();
        assert!(matches!(err, PlanError::UnknownNode(n) if n == node("X")));

        // Unknown origin equal to unknown destination is still an error
        let err = find_leg(&graph, &node("X"), &node("X"), 60.0).unwrap_err();
        assert!(matches!(err, PlanError::UnknownNode(_)));
    }

    #[test]
    fn zero_length_roads_are_traversable() {
        let graph = GraphBuilder::new()
            .road("A", "B", 0.0)
            .road("B", "C", 0.0)
            .build()
            .unwrap();

        let leg = find_leg(&graph, &node("A"), &node("C"), 60.0).unwrap();
        assert_eq!(leg, stops(&["B", "C"]));
    }

    #[test]
    fn equal_cost_ties_resolve_the_same_way_every_time() {
        // Two cost-identical ways from A to D.
        let graph = GraphBuilder::new()
            .road("A", "B", 10.0)
            .road("A", "C", 10.0)
            .road("B", "D", 10.0)
            .road("C", "D", 10.0)
            .build()
            .unwrap();

        let first = find_leg(&graph, &node("A"), &node("D"), 60.0).unwrap();
        for _ in 0..20 {
            let again = find_leg(&graph, &node("A"), &node("D"), 60.0).unwrap();
            assert_eq!(again, first);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::graph::GraphBuilder;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const NAMES: [&str; 5] = ["A", "B", "C", "D", "E"];

    fn node(s: &str) -> NodeId {
        NodeId::parse(s).unwrap()
    }

    /// Exhaustive minimum over simple paths, scored with the same cost
    /// model as the search: travel time per road plus the delay of every
    /// stop left other than the origin.
    fn brute_force_best_mins(
        graph: &RoadGraph,
        origin: &NodeId,
        destination: &NodeId,
        speed_kph: f64,
    ) -> Option<f64> {
        fn recurse(
            graph: &RoadGraph,
            current: &NodeId,
            destination: &NodeId,
            origin: &NodeId,
            speed_kph: f64,
            elapsed: f64,
            visited: &mut HashSet<NodeId>,
            best: &mut Option<f64>,
        ) {
            if current == destination {
                if best.is_none_or(|b| elapsed < b) {
                    *best = Some(elapsed);
                }
                return;
            }
            let delay = if current == origin {
                0.0
            } else {
                graph.delay_mins(current).unwrap()
            };
            for (next, &km) in graph.neighbors(current).unwrap() {
                if visited.contains(next) {
                    continue;
                }
                visited.insert(next.clone());
                recurse(
                    graph,
                    next,
                    destination,
                    origin,
                    speed_kph,
                    elapsed + travel_mins(km, speed_kph) + delay,
                    visited,
                    best,
                );
                visited.remove(next);
            }
        }

        let mut best = None;
        let mut visited = HashSet::from([origin.clone()]);
        recurse(
            graph, origin, destination, origin, speed_kph, 0.0, &mut visited, &mut best,
        );
        best
    }

    /// Scores the stops `find_leg` returned, with the same exemptions.
    fn leg_cost_mins(graph: &RoadGraph, origin: &NodeId, leg: &[NodeId], speed_kph: f64) -> f64 {
        let mut total = 0.0;
        let mut current = origin.clone();
        for next in leg {
            let km = graph
                .distance_km(&current, next)
                .unwrap()
                .expect("leg must follow existing roads");
            total += travel_mins(km, speed_kph);
            if current != *origin {
                total += graph.delay_mins(&current).unwrap();
            }
            current = next.clone();
        }
        total
    }

    #[derive(Debug, Clone)]
    struct RandomGraph {
        delays: Vec<u8>,
        roads: Vec<(usize, usize, u8)>,
    }

    impl RandomGraph {
        fn build(&self) -> RoadGraph {
            let mut builder = GraphBuilder::new();
            for (i, name) in NAMES.iter().enumerate() {
                builder = builder.node(name, f64::from(self.delays[i]));
            }
            for &(from, to, km) in &self.roads {
                builder = builder.road(NAMES[from], NAMES[to], f64::from(km));
            }
            builder.build().unwrap()
        }
    }

    fn random_graph() -> impl Strategy<Value = RandomGraph> {
        (
            proptest::collection::vec(0u8..6, NAMES.len()),
            proptest::collection::vec((0..NAMES.len(), 0..NAMES.len(), 0u8..50), 0..18),
        )
            .prop_map(|(delays, roads)| RandomGraph { delays, roads })
    }

    fn speed() -> impl Strategy<Value = f64> {
        prop_oneof![Just(30.0), Just(60.0), Just(90.0), Just(120.0)]
    }

    proptest! {
        /// The search agrees with exhaustive enumeration on reachability
        /// and on the optimal time.
        #[test]
        fn matches_brute_force(
            shape in random_graph(),
            from in 0..NAMES.len(),
            to in 0..NAMES.len(),
            speed_kph in speed(),
        ) {
            let graph = shape.build();
            let origin = node(NAMES[from]);
            let destination = node(NAMES[to]);

            let expected = brute_force_best_mins(&graph, &origin, &destination, speed_kph);
            match find_leg(&graph, &origin, &destination, speed_kph) {
                Ok(leg) => {
                    let expected = expected.expect("search found a path enumeration missed");
                    let actual = leg_cost_mins(&graph, &origin, &leg, speed_kph);
                    prop_assert!(
                        (actual - expected).abs() < 1e-6,
                        "search found {actual} mins, enumeration found {expected}"
                    );
                }
                Err(PlanError::RouteNotFound { .. }) => {
                    prop_assert!(expected.is_none(), "enumeration found a path the search missed");
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        /// Legs never repeat a stop and always follow existing roads.
        #[test]
        fn legs_are_simple_paths(
            shape in random_graph(),
            from in 0..NAMES.len(),
            to in 0..NAMES.len(),
        ) {
            let graph = shape.build();
            let origin = node(NAMES[from]);
            let destination = node(NAMES[to]);

            if let Ok(leg) = find_leg(&graph, &origin, &destination, 60.0) {
                let mut seen = HashSet::from([origin.clone()]);
                let mut current = origin.clone();
                for stop in &leg {
                    prop_assert!(
                        graph.distance_km(&current, stop).unwrap().is_some(),
                        "no road from {current} to {stop}"
                    );
                    prop_assert!(seen.insert(stop.clone()), "stop {stop} repeated");
                    current = stop.clone();
                }
                if origin != destination {
                    prop_assert_eq!(leg.last(), Some(&destination));
                }
            }
        }
    }
}

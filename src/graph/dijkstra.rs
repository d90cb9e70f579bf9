use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{EdgeWeights, RouteGraph};

#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<L> {
    /// Total weight along the path, infinite if the end cannot be reached or if the sum of the
    /// weights overflows.
    pub distance: f64,
    /// Locations from start to end inclusive, empty if the end cannot be reached.
    pub path: Vec<L>,
}

impl<L> ShortestPath<L> {
    pub const fn not_found() -> Self {
        Self {
            distance: f64::INFINITY,
            path: vec![],
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Computes the minimum total weight path from start to end over the given edge weights.
///
/// Every location of the graph takes part in the search, including the ones that have no edge in
/// the given weights. The search repeatedly selects the unvisited location with the smallest
/// tentative distance, scanning the unvisited locations in their sorted order: among locations
/// at the same distance the smallest one is selected first, which makes the returned path
/// deterministic when several shortest paths exist.
///
/// Weights must be non-negative. If start or end do not belong to the graph, or the end cannot be
/// reached from the start, the returned path is empty and its distance infinite. Reachability
/// does not depend on the distance value: a path whose total weight overflows is still returned.
pub fn shortest_path<'a, L, W>(
    graph: &'a RouteGraph<L>,
    weights: &'a W,
    start: &L,
    end: &L,
) -> ShortestPath<L>
where
    L: Debug + Clone + Ord + Hash,
    W: EdgeWeights<L>,
{
    debug!("Computing shortest path {start:?} -> {end:?}");

    let locations = graph.locations();
    let Some(end) = locations.get(end) else {
        debug!("Unknown location {end:?}");
        return ShortestPath::not_found();
    };

    // (current) shortest distance from start to each reached location, unreached locations
    // have no entry
    let mut distances: FxHashMap<&'a L, f64> = locations
        .get(start)
        .map(|start| (start, 0.0))
        .into_iter()
        .collect();

    // previous location on the current best known path from start to the location (key)
    let mut previous: FxHashMap<&'a L, &'a L> = FxHashMap::default();

    let mut unvisited: BTreeSet<&'a L> = locations.iter().collect();

    while let Some((current, current_distance)) = nearest_unvisited(&unvisited, &distances) {
        trace!("Selected {current:?} at distance {current_distance}");

        if current == end {
            break;
        }

        unvisited.remove(current);

        for (neighbor, weight) in weights.exiting_edges(current) {
            if !unvisited.contains(neighbor) {
                continue;
            }

            // may overflow to infinity, the neighbor is reached nonetheless
            let distance = current_distance + weight;

            // Relax: following the current location is the first or a cheaper way to reach the
            // neighbor
            if distances
                .get(neighbor)
                .is_none_or(|&neighbor_distance| distance < neighbor_distance)
            {
                distances.insert(neighbor, distance);
                previous.insert(neighbor, current);
            }
        }
    }

    let Some(&distance) = distances.get(end) else {
        debug!("No path {start:?} -> {end:?}");
        return ShortestPath::not_found();
    };

    ShortestPath {
        distance,
        path: unpack_path(&previous, end).into_iter().cloned().collect(),
    }
}

/// Selects the first reached unvisited location with the smallest distance.
fn nearest_unvisited<'a, L: Ord + Hash>(
    unvisited: &BTreeSet<&'a L>,
    distances: &FxHashMap<&'a L, f64>,
) -> Option<(&'a L, f64)> {
    unvisited
        .iter()
        .filter_map(|&location| Some((location, *distances.get(location)?)))
        .min_by(|(_, d1), (_, d2)| d1.total_cmp(d2))
}

/// Unpacks the shortest path from destination back to origin.
fn unpack_path<'a, L: Eq + Hash>(
    previous: &FxHashMap<&'a L, &'a L>,
    destination: &'a L,
) -> Vec<&'a L> {
    let mut path = vec![destination];
    let mut next = destination;

    while let Some(&location) = previous.get(next) {
        next = location;
        path.push(location);
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::graph::tests::{graph, id};

    #[test]
    fn shortest_path_001() {
        let graph = graph(&[("A", "B", 10.0, 1.0), ("B", "C", 10.0, 1.0), ("A", "C", 30.0, 1.0)]);

        let path = shortest_path(&graph, graph.cost_weights(), &id("A"), &id("C"));
        assert_eq!(path.distance, 20.0);
        assert_eq!(path.path, ["A", "B", "C"]);

        let path = shortest_path(&graph, graph.duration_weights(), &id("A"), &id("C"));
        assert_eq!(path.distance, 1.0);
        assert_eq!(path.path, ["A", "C"]);

        let path = shortest_path(&graph, &graph.combined_weights(), &id("A"), &id("C"));
        assert_eq!(path.distance, 130.0);
        assert_eq!(path.path, ["A", "C"]);
    }

    #[test]
    fn shortest_path_002() {
        let graph = graph(&[("A", "B", 1.0, 1.0), ("X", "Y", 1.0, 1.0)]);

        let path = shortest_path(&graph, graph.cost_weights(), &id("A"), &id("Y"));
        assert_eq!(path, ShortestPath::not_found());
        assert!(!path.is_found());
        assert!(path.distance.is_infinite());
    }

    #[test]
    fn shortest_path_003() {
        let graph = graph(&[("A", "B", 3.0, 1.0)]);

        let path = shortest_path(&graph, graph.cost_weights(), &id("A"), &id("A"));
        assert_eq!(path.distance, 0.0);
        assert_eq!(path.path, ["A"]);
    }

    #[test]
    fn shortest_path_004() {
        let graph = graph(&[("A", "B", 3.0, 1.0)]);

        let unknown = shortest_path(&graph, graph.cost_weights(), &id("A"), &id("Z"));
        assert_eq!(unknown, ShortestPath::not_found());

        let unknown = shortest_path(&graph, graph.cost_weights(), &id("Z"), &id("B"));
        assert_eq!(unknown, ShortestPath::not_found());

        let unknown = shortest_path(&graph, graph.cost_weights(), &id("Z"), &id("Z"));
        assert_eq!(unknown, ShortestPath::not_found());
    }

    #[test]
    fn shortest_path_005() {
        // A - B - D and A - C - D have the same cost: B is selected before C
        let graph = graph(&[
            ("A", "C", 1.0, 1.0),
            ("C", "D", 1.0, 1.0),
            ("A", "B", 1.0, 1.0),
            ("B", "D", 1.0, 1.0),
        ]);

        for _ in 0..10 {
            let path = shortest_path(&graph, graph.cost_weights(), &id("A"), &id("D"));
            assert_eq!(path.distance, 2.0);
            assert_eq!(path.path, ["A", "B", "D"]);
        }

        let path = shortest_path(&graph, graph.cost_weights(), &id("D"), &id("A"));
        assert_eq!(path.path, ["D", "B", "A"]);
    }

    #[test]
    fn shortest_path_006() {
        // zero weight edges are followed like any other edge
        let graph = graph(&[("A", "B", 0.0, 1.0), ("B", "C", 0.0, 1.0), ("A", "C", 1.0, 1.0)]);

        let path = shortest_path(&graph, graph.cost_weights(), &id("A"), &id("C"));
        assert_eq!(path.distance, 0.0);
        assert_eq!(path.path, ["A", "B", "C"]);
    }

    #[test]
    fn shortest_path_007() {
        let graph = graph(&[
            ("A", "B", 7.0, 1.0),
            ("A", "C", 9.0, 1.0),
            ("A", "F", 14.0, 1.0),
            ("B", "C", 10.0, 1.0),
            ("B", "D", 15.0, 1.0),
            ("C", "D", 11.0, 1.0),
            ("C", "F", 2.0, 1.0),
            ("D", "E", 6.0, 1.0),
            ("E", "F", 9.0, 1.0),
        ]);

        let path = shortest_path(&graph, graph.cost_weights(), &id("A"), &id("E"));
        assert_eq!(path.distance, 20.0);
        assert_eq!(path.path, ["A", "C", "F", "E"]);

        let path = shortest_path(&graph, graph.duration_weights(), &id("A"), &id("E"));
        assert_eq!(path.distance, 2.0);
        assert_eq!(path.path, ["A", "F", "E"]);
    }

    #[test]
    fn shortest_path_008() {
        // total weight overflows to infinity but C is still reachable
        let graph = graph(&[("A", "B", 1e308, 1.0), ("B", "C", 1e308, 1.0)]);

        let path = shortest_path(&graph, graph.cost_weights(), &id("A"), &id("C"));
        assert!(path.distance.is_infinite());
        assert_eq!(path.path, ["A", "B", "C"]);
        assert!(path.is_found());

        let path = shortest_path(&graph, graph.duration_weights(), &id("A"), &id("C"));
        assert_eq!(path.distance, 2.0);
        assert_eq!(path.path, ["A", "B", "C"]);
    }

    #[test]
    fn unpack_path_001() {
        let [a, b, c] = [id("A"), id("B"), id("C")];
        let previous = FxHashMap::from_iter([(&c, &b), (&b, &a)]);

        assert_eq!(unpack_path(&previous, &c), [&a, &b, &c]);
        assert_eq!(unpack_path(&previous, &a), [&a]);
    }
}

//! Traffic-weighted A* search over a route graph.

use std::{cmp::Ordering, collections::BinaryHeap};

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::geometry::distance_m;
use crate::model::RouteGraph;

#[derive(Copy, Clone, PartialEq)]
struct State {
    f: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Min-heap by f-cost (reversed from standard Rust BinaryHeap), ties broken
// on node index so expansion order is fully deterministic.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Edge-cost multiplier for a traffic score in [0, 1].
///
/// 1.0 means free flow (no penalty); 0.0 doubles every edge. The penalty is
/// graph-wide and uniform per edge, not location-specific.
pub(crate) fn traffic_multiplier(traffic_score: f64) -> f64 {
    1.0 + (1.0 - traffic_score.clamp(0.0, 1.0))
}

/// A* shortest path from `start` to `goal` with traffic-inflated edge costs.
///
/// Edge cost is the segment length in meters times
/// [`traffic_multiplier`]; the heuristic is the haversine distance to the
/// goal, which never overestimates because the multiplier is at least 1.
///
/// Returns the path as node indices from start to goal, or an empty vector
/// when the goal is unreachable or the query is degenerate (empty graph,
/// out-of-range indices, identical endpoints). Never fails or panics.
pub fn find_path(
    graph: &RouteGraph,
    start: NodeIndex,
    goal: NodeIndex,
    traffic_score: f64,
) -> Vec<NodeIndex> {
    let node_count = graph.node_count();
    let (Some(_), Some(goal_point)) = (graph.point(start), graph.point(goal)) else {
        return Vec::new();
    };
    if start == goal {
        return Vec::new();
    }

    let multiplier = traffic_multiplier(traffic_score);

    let mut g_score: HashMap<NodeIndex, f64> = HashMap::with_capacity(node_count);
    let mut came_from: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(node_count);
    let mut closed = FixedBitSet::with_capacity(node_count);
    let mut open = BinaryHeap::new();

    g_score.insert(start, 0.0);
    open.push(State {
        f: heuristic(graph, start, goal_point),
        node: start,
    });

    while let Some(State { node, .. }) = open.pop() {
        if node == goal {
            return reconstruct_path(&came_from, goal);
        }

        // Stale duplicate of an already expanded node
        if closed.contains(node.index()) {
            continue;
        }
        closed.insert(node.index());

        let current_g = g_score[&node];

        for edge in graph.graph.edges(node) {
            let neighbor = edge.target();
            if closed.contains(neighbor.index()) {
                continue;
            }

            let tentative_g = current_g + edge.weight().length_m * multiplier;

            if tentative_g < *g_score.get(&neighbor).unwrap_or(&f64::INFINITY) {
                g_score.insert(neighbor, tentative_g);
                came_from.insert(neighbor, node);
                open.push(State {
                    f: tentative_g + heuristic(graph, neighbor, goal_point),
                    node: neighbor,
                });
            }
        }
    }

    Vec::new()
}

/// Total length of a path in meters, following the stored segment edges.
///
/// Empty and single-node paths measure zero.
pub fn path_distance_m(graph: &RouteGraph, path: &[NodeIndex]) -> f64 {
    path.windows(2)
        .filter_map(|pair| {
            graph
                .graph
                .find_edge(pair[0], pair[1])
                .and_then(|edge| graph.graph.edge_weight(edge))
        })
        .map(|edge| edge.length_m)
        .sum()
}

fn heuristic(graph: &RouteGraph, node: NodeIndex, goal_point: geo::Point<f64>) -> f64 {
    graph
        .point(node)
        .map_or(0.0, |p| distance_m(p, goal_point))
}

fn reconstruct_path(
    came_from: &HashMap<NodeIndex, NodeIndex>,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::sampling::build_sampled;

    #[test]
    fn chain_search_visits_every_node() {
        let g = build_sampled(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 8);
        let (start, goal) = g.endpoints().unwrap();

        let path = find_path(&g, start, goal, 1.0);

        assert_eq!(path.len(), 8);
        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), goal);
    }

    #[test]
    fn reverse_search_also_reaches_goal() {
        let g = build_sampled(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 6);
        let (start, goal) = g.endpoints().unwrap();

        let path = find_path(&g, goal, start, 0.5);

        assert_eq!(path.len(), 6);
        assert_eq!(path[0], goal);
        assert_eq!(*path.last().unwrap(), start);
    }

    #[test]
    fn degenerate_queries_yield_empty_paths() {
        let empty = RouteGraph::default();
        assert!(find_path(&empty, NodeIndex::new(0), NodeIndex::new(1), 1.0).is_empty());

        let g = build_sampled(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 4);
        let (start, _) = g.endpoints().unwrap();
        assert!(find_path(&g, start, start, 1.0).is_empty());
        assert!(find_path(&g, start, NodeIndex::new(99), 1.0).is_empty());
    }

    #[test]
    fn traffic_penalty_never_shrinks_weighted_cost() {
        let g = build_sampled(Point::new(0.0, 0.0), Point::new(0.5, 0.5), 10);
        let (start, goal) = g.endpoints().unwrap();

        let path = find_path(&g, start, goal, 1.0);
        let base = path_distance_m(&g, &path);

        let mut previous = 0.0;
        for score in [1.0, 0.8, 0.5, 0.2, 0.0] {
            let weighted = base * traffic_multiplier(score);
            assert!(weighted >= previous);
            previous = weighted;
        }
    }

    #[test]
    fn distance_of_trivial_paths_is_zero() {
        let g = build_sampled(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 4);
        let (start, _) = g.endpoints().unwrap();

        assert_eq!(path_distance_m(&g, &[]), 0.0);
        assert_eq!(path_distance_m(&g, &[start]), 0.0);
    }
}

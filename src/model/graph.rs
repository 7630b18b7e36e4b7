//! Chain graph of sampled geographic waypoints.

use geo::Point;
use petgraph::graph::{Graph, NodeIndex};

use crate::geometry::distance_m;

/// A sampled geographic waypoint.
///
/// The node carries only immutable geometry; search state lives in
/// per-search maps keyed by [`NodeIndex`], so concurrent searches over
/// different graphs never share mutable state.
#[derive(Debug, Clone, Copy)]
pub struct GeoNode {
    /// Node coordinates (x = longitude, y = latitude)
    pub geometry: Point<f64>,
}

/// A road segment between two adjacent waypoints.
#[derive(Debug, Clone, Copy)]
pub struct SegmentEdge {
    /// Haversine length of the segment in meters
    pub length_m: f64,
}

/// An ordered chain of [`GeoNode`]s with adjacency edges.
///
/// Each node is linked to its immediate predecessor and successor only, so
/// the graph is a simple path graph: there is exactly one topological route
/// between any two nodes. Route diversity comes from re-sampling with
/// different jitter, not from distinct paths within one graph.
///
/// A graph is owned by the call that built it and discarded after the
/// search that used it completes.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    pub graph: Graph<GeoNode, SegmentEdge>,
}

impl RouteGraph {
    /// Builds a chain graph from points in traversal order.
    ///
    /// Adjacency is stored as symmetric directed edges (`i -> i+1` and
    /// `i+1 -> i`), each weighted with the segment's haversine length.
    pub fn from_chain(points: &[Point<f64>]) -> Self {
        let mut graph = Graph::with_capacity(points.len(), points.len().saturating_sub(1) * 2);

        let indices: Vec<NodeIndex> = points
            .iter()
            .map(|&geometry| graph.add_node(GeoNode { geometry }))
            .collect();

        for pair in indices.windows(2) {
            let length_m = distance_m(points[pair[0].index()], points[pair[1].index()]);
            graph.add_edge(pair[0], pair[1], SegmentEdge { length_m });
            graph.add_edge(pair[1], pair[0], SegmentEdge { length_m });
        }

        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// First and last sampled nodes, the natural start/goal pair of a
    /// chain graph. `None` for an empty graph.
    pub fn endpoints(&self) -> Option<(NodeIndex, NodeIndex)> {
        let first = self.graph.node_indices().next()?;
        let last = self.graph.node_indices().next_back()?;
        Some((first, last))
    }

    /// Coordinates of a node, if the index belongs to this graph.
    pub fn point(&self, node: NodeIndex) -> Option<Point<f64>> {
        self.graph.node_weight(node).map(|n| n.geometry)
    }

    /// Coordinates along a path of node indices, in path order.
    pub fn path_points(&self, path: &[NodeIndex]) -> Vec<Point<f64>> {
        path.iter().filter_map(|&node| self.point(node)).collect()
    }
}

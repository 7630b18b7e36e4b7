//! Route-candidate synthesis: weighted searches over one graph, or one
//! fixed-weight search over each of several independently jittered graphs.

use geo::Point;
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

use crate::ASSUMED_SPEED_KMH;
use crate::Error;
use crate::directions::generate_directions;
use crate::model::{RouteCandidate, RouteGraph};
use crate::routing::astar::{find_path, path_distance_m};
use crate::sampling::{SamplingConfig, build_from_polyline, build_multi_route};
use crate::sources::RouteGeometrySource;

/// Fixed search weight used when the candidates differ by graph rather
/// than by traffic weighting.
const ALTERNATIVE_TRAFFIC_SCORE: f64 = 0.7;

/// Generates the three named route candidates from a single graph by
/// varying the traffic weighting of the search:
///
/// - "Shortest Route" ignores traffic entirely (`traffic_score = 1.0`);
/// - "Fastest Route" applies a mild fixed penalty (`traffic_score = 0.8`);
/// - "Low Traffic Route" uses the live score, so its edge multiplier
///   `1 + (1 - live_traffic_score)` grows as congestion worsens.
///
/// On a chain graph all three share one topology, so they differ in cost
/// and annotations rather than geometry; use
/// [`alternatives_from_distinct_graphs`] for visually distinct polylines.
///
/// # Errors
///
/// Returns [`Error::EmptyGraph`] when the graph has no nodes.
pub fn generate_route_candidates(
    graph: &RouteGraph,
    live_traffic_score: f64,
) -> Result<Vec<RouteCandidate>, Error> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }

    let candidates = vec![
        build_candidate("Shortest Route", graph, 1.0),
        build_candidate("Fastest Route", graph, 0.8),
        build_candidate("Low Traffic Route", graph, live_traffic_score),
    ];

    info!(
        "Synthesized {} route candidates over {} nodes",
        candidates.len(),
        graph.node_count()
    );

    Ok(candidates)
}

/// Generates three candidates with visually distinct polylines by building
/// an independently jittered graph per candidate and running a single
/// fixed-weight search on each.
pub fn alternatives_from_distinct_graphs<R: Rng + ?Sized>(
    start: Point<f64>,
    end: Point<f64>,
    config: &SamplingConfig,
    rng: &mut R,
) -> Vec<RouteCandidate> {
    let names = ["Shortest Route", "Fastest Route", "Low Traffic Route"];

    // Graphs are sampled sequentially from the caller's rng, then searched
    // in parallel since each candidate owns its graph exclusively.
    let graphs: Vec<RouteGraph> = names
        .iter()
        .map(|_| build_multi_route(start, end, config, rng))
        .collect();

    names
        .into_par_iter()
        .zip(graphs)
        .map(|(name, graph)| build_candidate(name, &graph, ALTERNATIVE_TRAFFIC_SCORE))
        .collect()
}

/// Obtains a graph for a start/end pair, preferring external route
/// geometry and silently substituting a jittered synthetic graph when the
/// source fails or returns fewer than two points.
pub fn plan_graph<R: Rng + ?Sized>(
    geometry: Option<&mut dyn RouteGeometrySource>,
    start: Point<f64>,
    end: Point<f64>,
    config: &SamplingConfig,
    rng: &mut R,
) -> RouteGraph {
    if let Some(source) = geometry {
        match source.fetch_polyline(start, end) {
            Ok(coords) if coords.len() >= 2 => return build_from_polyline(&coords),
            Ok(coords) => {
                debug!(
                    "Geometry source returned {} points - using synthetic graph",
                    coords.len()
                );
            }
            Err(e) => {
                debug!("Geometry source failed ({e}) - using synthetic graph");
            }
        }
    }

    build_multi_route(start, end, config, rng)
}

/// Runs one weighted search and packages the result.
fn build_candidate(name: &str, graph: &RouteGraph, traffic_score: f64) -> RouteCandidate {
    let path = match graph.endpoints() {
        Some((start, goal)) => find_path(graph, start, goal, traffic_score),
        None => Vec::new(),
    };

    let total_distance_km = path_distance_m(graph, &path) / 1000.0;
    let total_duration_min = total_distance_km / ASSUMED_SPEED_KMH * 60.0;

    // Rendering output is [lat, lng]
    let coordinates = graph
        .path_points(&path)
        .iter()
        .map(|p| [p.y(), p.x()])
        .collect();

    RouteCandidate {
        route_name: name.to_string(),
        total_distance_km,
        total_duration_min,
        coordinates,
        instructions: generate_directions(graph, &path),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::sampling::build_sampled;

    struct FixedPolyline(Vec<(f64, f64)>);

    impl RouteGeometrySource for FixedPolyline {
        fn fetch_polyline(
            &mut self,
            _start: Point<f64>,
            _end: Point<f64>,
        ) -> Result<Vec<(f64, f64)>, Error> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl RouteGeometrySource for FailingSource {
        fn fetch_polyline(
            &mut self,
            _start: Point<f64>,
            _end: Point<f64>,
        ) -> Result<Vec<(f64, f64)>, Error> {
            Err(Error::GeometrySource("upstream timeout".to_string()))
        }
    }

    #[test]
    fn candidates_carry_names_and_geometry() {
        let graph = build_sampled(Point::new(77.59, 12.97), Point::new(77.75, 13.2), 12);
        let candidates = generate_route_candidates(&graph, 0.3).unwrap();

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].route_name, "Shortest Route");
        assert_eq!(candidates[1].route_name, "Fastest Route");
        assert_eq!(candidates[2].route_name, "Low Traffic Route");

        for candidate in &candidates {
            assert_eq!(candidate.coordinates.len(), 12);
            assert!(candidate.total_distance_km > 0.0);
            assert!(candidate.total_duration_min > 0.0);
            assert_eq!(
                candidate.instructions.last().unwrap().distance_m,
                0.0,
                "last instruction must be the arrival"
            );
        }
    }

    #[test]
    fn duration_uses_assumed_speed() {
        let graph = build_sampled(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 5);
        let candidates = generate_route_candidates(&graph, 1.0).unwrap();

        let c = &candidates[0];
        let expected_min = c.total_distance_km / ASSUMED_SPEED_KMH * 60.0;
        assert!((c.total_duration_min - expected_min).abs() < 1e-9);
    }

    #[test]
    fn empty_graph_is_an_error() {
        let graph = RouteGraph::default();
        assert!(matches!(
            generate_route_candidates(&graph, 0.5),
            Err(Error::EmptyGraph)
        ));
    }

    #[test]
    fn distinct_graphs_produce_distinct_polylines() {
        let mut rng = StdRng::seed_from_u64(11);
        let candidates = alternatives_from_distinct_graphs(
            Point::new(77.59, 12.97),
            Point::new(77.75, 13.2),
            &SamplingConfig::default(),
            &mut rng,
        );

        assert_eq!(candidates.len(), 3);
        assert_ne!(candidates[0].coordinates, candidates[1].coordinates);
        assert_ne!(candidates[1].coordinates, candidates[2].coordinates);
    }

    #[test]
    fn plan_graph_prefers_external_polyline() {
        let mut source = FixedPolyline(vec![(77.59, 12.97), (77.60, 12.98), (77.61, 12.99)]);
        let graph = plan_graph(
            Some(&mut source),
            Point::new(77.59, 12.97),
            Point::new(77.75, 13.2),
            &SamplingConfig::default(),
            &mut StdRng::seed_from_u64(3),
        );

        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn plan_graph_falls_back_on_failure_and_degenerate_geometry() {
        let config = SamplingConfig::default();

        let graph = plan_graph(
            Some(&mut FailingSource),
            Point::new(77.59, 12.97),
            Point::new(77.75, 13.2),
            &config,
            &mut StdRng::seed_from_u64(4),
        );
        assert_eq!(graph.node_count(), config.samples);

        let mut short = FixedPolyline(vec![(77.59, 12.97)]);
        let graph = plan_graph(
            Some(&mut short),
            Point::new(77.59, 12.97),
            Point::new(77.75, 13.2),
            &config,
            &mut StdRng::seed_from_u64(5),
        );
        assert_eq!(graph.node_count(), config.samples);
    }
}

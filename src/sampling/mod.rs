//! Graph builders: linear sampling, jittered multi-route sampling and
//! external polyline import.
//!
//! All builders produce the same chain topology (node `i` linked to
//! `i - 1` and `i + 1` only); see [`RouteGraph::from_chain`].

use geo::Point;
use rand::Rng;

use crate::model::RouteGraph;

/// Sampling parameters for synthetic graphs.
#[derive(Debug, Clone, Copy)]
pub struct SamplingConfig {
    /// Number of interpolated waypoints, endpoints included (min 2)
    pub samples: usize,
    /// Maximum per-axis jitter applied by the multi-route builder, degrees
    pub jitter_degrees: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples: 25,
            jitter_degrees: 0.005,
        }
    }
}

/// Linearly interpolates `samples` waypoints between `start` and `end`
/// inclusive and chain-links them.
///
/// Deterministic: identical inputs always produce identical node
/// coordinates. `samples` is clamped to at least 2.
pub fn build_sampled(start: Point<f64>, end: Point<f64>, samples: usize) -> RouteGraph {
    RouteGraph::from_chain(&interpolate(start, end, samples))
}

/// Like [`build_sampled`] but perturbs every waypoint by a uniform random
/// offset within `±jitter_degrees` on each axis, producing a visually
/// distinct route variation per call.
///
/// Randomness comes from the injected `rng`, so a seeded generator makes
/// the output reproducible.
pub fn build_multi_route<R: Rng + ?Sized>(
    start: Point<f64>,
    end: Point<f64>,
    config: &SamplingConfig,
    rng: &mut R,
) -> RouteGraph {
    let jitter = config.jitter_degrees;
    let points: Vec<Point<f64>> = interpolate(start, end, config.samples)
        .into_iter()
        .map(|p| {
            Point::new(
                p.x() + rng.gen_range(-jitter..=jitter),
                p.y() + rng.gen_range(-jitter..=jitter),
            )
        })
        .collect();

    RouteGraph::from_chain(&points)
}

/// Builds a chain graph from an ordered polyline of `(lon, lat)` pairs.
///
/// The input uses GeoJSON axis order, as delivered by external routing
/// services; this is intentionally the reverse of the `[lat, lng]`
/// rendering order used in route candidates. Empty input yields an empty
/// graph.
pub fn build_from_polyline(coords: &[(f64, f64)]) -> RouteGraph {
    let points: Vec<Point<f64>> = coords.iter().map(|&(lon, lat)| Point::new(lon, lat)).collect();

    RouteGraph::from_chain(&points)
}

fn interpolate(start: Point<f64>, end: Point<f64>, samples: usize) -> Vec<Point<f64>> {
    let samples = samples.max(2);

    (0..samples)
        .map(|i| {
            let t = i as f64 / (samples - 1) as f64;
            Point::new(
                start.x() + t * (end.x() - start.x()),
                start.y() + t * (end.y() - start.y()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn sampled_is_deterministic() {
        let start = Point::new(77.59, 12.97);
        let end = Point::new(77.75, 13.2);

        let a = build_sampled(start, end, 10);
        let b = build_sampled(start, end, 10);

        assert_eq!(a.node_count(), 10);
        for (na, nb) in a.graph.node_weights().zip(b.graph.node_weights()) {
            assert_eq!(na.geometry, nb.geometry);
        }
    }

    #[test]
    fn sampled_clamps_to_two_nodes() {
        let g = build_sampled(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 0);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn sampled_endpoints_are_exact() {
        let start = Point::new(10.0, 20.0);
        let end = Point::new(11.0, 21.0);
        let g = build_sampled(start, end, 5);

        let (first, last) = g.endpoints().unwrap();
        assert_eq!(g.point(first).unwrap(), start);
        assert_eq!(g.point(last).unwrap(), end);
    }

    #[test]
    fn multi_route_jitter_is_bounded_and_seeded() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(1.0, 0.0);
        let config = SamplingConfig::default();

        let a = build_multi_route(start, end, &config, &mut StdRng::seed_from_u64(7));
        let b = build_multi_route(start, end, &config, &mut StdRng::seed_from_u64(7));
        let straight = build_sampled(start, end, config.samples);

        for ((na, nb), ns) in a
            .graph
            .node_weights()
            .zip(b.graph.node_weights())
            .zip(straight.graph.node_weights())
        {
            // Same seed, same graph
            assert_eq!(na.geometry, nb.geometry);
            assert!((na.geometry.x() - ns.geometry.x()).abs() <= config.jitter_degrees);
            assert!((na.geometry.y() - ns.geometry.y()).abs() <= config.jitter_degrees);
        }
    }

    #[test]
    fn polyline_preserves_lon_lat_input_order() {
        let g = build_from_polyline(&[(77.59, 12.97), (77.60, 12.98)]);
        let (first, _) = g.endpoints().unwrap();
        let p = g.point(first).unwrap();

        assert_eq!(p.x(), 77.59); // longitude
        assert_eq!(p.y(), 12.97); // latitude
    }

    #[test]
    fn empty_polyline_builds_empty_graph() {
        assert!(build_from_polyline(&[]).is_empty());
    }
}

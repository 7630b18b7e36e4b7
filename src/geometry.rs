//! Great-circle helpers shared by the graph builders, the search and the
//! instruction generator.

use geo::{Bearing, Distance, Haversine, Point};

/// Haversine distance between two points in meters.
pub fn distance_m(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b)
}

/// Initial bearing from `a` to `b` in degrees, clockwise from north,
/// normalized to [0, 360).
pub fn bearing_deg(a: Point<f64>, b: Point<f64>) -> f64 {
    normalize_bearing(Haversine.bearing(a, b))
}

pub fn normalize_bearing(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Smallest signed angle from `source` to `target` in degrees, normalized
/// to (-180, +180]. Positive means a clockwise (rightward) change.
pub fn bearing_delta_deg(source: f64, target: f64) -> f64 {
    let mut delta = (target - source).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

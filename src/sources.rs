//! Boundary traits for the external signal collaborators, plus simulated
//! implementations so the engine runs end-to-end without live services.
//!
//! The engine never performs I/O itself; implementations of these traits
//! are called before or between searches, never inside them.

use geo::Point;
use rand::Rng;

use crate::Error;
use crate::geometry::distance_m;

/// Supplies route geometry from an external map/directions service as an
/// ordered list of `(lon, lat)` pairs.
///
/// Failures are expected and recoverable: the route planner falls back to
/// a synthetic jittered graph whenever this source errors out or returns
/// degenerate geometry.
pub trait RouteGeometrySource {
    fn fetch_polyline(
        &mut self,
        start: Point<f64>,
        end: Point<f64>,
    ) -> Result<Vec<(f64, f64)>, Error>;
}

/// Supplies a live traffic score in [0, 1] for a start/end pair
/// (1 = free flow, 0 = heavy congestion).
pub trait TrafficSignalSource {
    fn traffic_score(&mut self, start: Point<f64>, end: Point<f64>) -> f64;
}

/// Supplies a weather badness score in [0, 1] for a location.
pub trait WeatherSignalSource {
    fn weather_score(&mut self, location: Point<f64>) -> f64;
}

/// Traffic heuristic backed by an injectable random source.
///
/// Simulates congestion as a factor in [0, 2) over the expected free-flow
/// travel time at 60 km/h; a real deployment replaces this with measured
/// travel times while keeping the score bounds.
#[derive(Debug, Clone)]
pub struct SimulatedTrafficSource<R> {
    rng: R,
}

impl<R: Rng> SimulatedTrafficSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TrafficSignalSource for SimulatedTrafficSource<R> {
    fn traffic_score(&mut self, start: Point<f64>, end: Point<f64>) -> f64 {
        let distance_km = distance_m(start, end) / 1000.0;
        let expected_s = distance_km / 60.0 * 3600.0;
        if expected_s <= 0.0 {
            return 1.0;
        }

        let congestion_factor = self.rng.gen_range(0.0..2.0);
        let actual_s = expected_s * congestion_factor;

        (actual_s / (expected_s * 2.0)).min(1.0)
    }
}

/// Weather heuristic backed by an injectable random source.
#[derive(Debug, Clone)]
pub struct SimulatedWeatherSource<R> {
    rng: R,
}

impl<R: Rng> SimulatedWeatherSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> WeatherSignalSource for SimulatedWeatherSource<R> {
    fn weather_score(&mut self, _location: Point<f64>) -> f64 {
        let temperature_c = 20.0 + self.rng.gen_range(0.0..20.0);
        let rain = self.rng.gen_range(0.0..1.0);
        let wind_kmh = self.rng.gen_range(0.0..15.0);

        let score: f64 = rain * 0.5 + wind_kmh / 30.0 + (temperature_c - 20.0) / 40.0;
        score.min(1.0)
    }
}

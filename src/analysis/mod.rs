//! Travel-data aggregation for route analysis.
//!
//! Bundles one planned route with its live traffic and weather signals
//! into the summary consumed by the recommendation boundary.

pub mod recommend;

pub use recommend::{RouteRecommendation, recommendation_from_response};

use geo::Point;
use rand::Rng;
use serde::Serialize;

use crate::ASSUMED_SPEED_KMH;
use crate::routing::astar::{find_path, path_distance_m};
use crate::routing::plan_graph;
use crate::sampling::SamplingConfig;
use crate::sources::{RouteGeometrySource, TrafficSignalSource, WeatherSignalSource};

/// Search weight used for the representative aggregation route.
const AGGREGATION_TRAFFIC_SCORE: f64 = 0.7;

/// Aggregated travel data for one start/end pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TravelSummary {
    pub distance_m: f64,
    pub duration_s: f64,
    pub traffic_score: f64,
    pub weather_score: f64,
}

impl TravelSummary {
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_s / 60.0
    }
}

/// Plans one representative route and gathers its signals.
///
/// Geometry failures fall back to a synthetic graph inside
/// [`plan_graph`]; signal sources are consulted once each. Degenerate
/// inputs produce a zero-distance summary rather than an error.
pub fn aggregate_travel_data<R: Rng + ?Sized>(
    geometry: Option<&mut dyn RouteGeometrySource>,
    traffic: &mut dyn TrafficSignalSource,
    weather: &mut dyn WeatherSignalSource,
    start: Point<f64>,
    end: Point<f64>,
    config: &SamplingConfig,
    rng: &mut R,
) -> TravelSummary {
    let graph = plan_graph(geometry, start, end, config, rng);

    let path = match graph.endpoints() {
        Some((from, to)) => find_path(&graph, from, to, AGGREGATION_TRAFFIC_SCORE),
        None => Vec::new(),
    };

    let distance_km = path_distance_m(&graph, &path) / 1000.0;
    let duration_s = distance_km / ASSUMED_SPEED_KMH * 3600.0;

    TravelSummary {
        distance_m: distance_km * 1000.0,
        duration_s,
        traffic_score: traffic.traffic_score(start, end),
        weather_score: weather.weather_score(end),
    }
}

pub use crate::ASSUMED_SPEED_KMH;

// Re-export key components
pub use crate::Error;
pub use crate::analysis::{
    RouteRecommendation, TravelSummary, aggregate_travel_data, recommendation_from_response,
};
pub use crate::directions::{Instruction, generate_directions};
pub use crate::model::{GeoNode, RiskProfile, RouteCandidate, RouteGraph, RouteSafetyScore, SafetyLevel};
pub use crate::routing::{
    alternatives_from_distinct_graphs, find_path, generate_route_candidates, path_distance_m,
    plan_graph,
};
pub use crate::sampling::{SamplingConfig, build_from_polyline, build_multi_route, build_sampled};
pub use crate::scoring::{RiskSignalSource, SimulatedRiskSource, score_route, score_route_with};
pub use crate::sources::{
    RouteGeometrySource, SimulatedTrafficSource, SimulatedWeatherSource, TrafficSignalSource,
    WeatherSignalSource,
};

//! Traffic-aware geographic routing and navigation engine
//!
//! The engine builds chain graphs of sampled or externally-supplied
//! coordinates, finds traffic-weighted shortest paths with A*, synthesizes
//! named route candidates, derives turn-by-turn instructions and computes
//! heuristic safety scores.
//!
//! Every operation is a synchronous, self-contained computation: each call
//! builds and owns its graph, performs its search and discards both, so the
//! crate is freely callable from concurrent request handlers without
//! locking. External map, traffic, weather and recommendation services are
//! consumed behind the traits in [`sources`] and never called from inside a
//! search.

pub mod analysis;
pub mod directions;
pub mod geometry;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod sampling;
pub mod scoring;
pub mod sources;

mod error;

pub use error::Error;
pub use model::{
    GeoNode, RiskProfile, RouteCandidate, RouteGraph, RouteSafetyScore, SafetyLevel, SegmentEdge,
};

/// Assumed average travel speed used for duration estimates, in km/h.
pub const ASSUMED_SPEED_KMH: f64 = 40.0;

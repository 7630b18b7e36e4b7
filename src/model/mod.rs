//! Data model for the routing engine
//!
//! Contains the route graph, the synthesized route candidates and the
//! safety-scoring result types.

pub mod graph;
pub mod route;
pub mod safety;

pub use graph::{GeoNode, RouteGraph, SegmentEdge};
pub use route::RouteCandidate;
pub use safety::{RiskProfile, RouteSafetyScore, SafetyLevel};

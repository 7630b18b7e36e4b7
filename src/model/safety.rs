//! Safety-scoring result types.

use serde::Serialize;

/// Categorical safety level derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyLevel {
    Low,
    Medium,
    High,
}

/// The four independent risk components, each in a fixed range:
/// night [0, 0.4], weather [0, 0.3], crime [0, 0.5], road [0, 0.4].
///
/// A production deployment replaces the sampled source with real signal
/// lookups; the ranges and the combination rule in
/// [`score_route`](crate::scoring::score_route) stay fixed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskProfile {
    pub night: f64,
    pub weather: f64,
    pub crime: f64,
    pub road: f64,
}

/// Aggregate safety assessment for a named route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSafetyScore {
    pub route_name: String,
    /// Aggregate score in [0, 1]; higher is safer
    pub safety_score: f64,
    pub safety_level: SafetyLevel,
    pub risk_factors: Vec<String>,
    pub night_risk: f64,
    pub weather_risk: f64,
    pub crime_risk: f64,
    pub road_condition_risk: f64,
}

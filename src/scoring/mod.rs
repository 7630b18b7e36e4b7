//! Heuristic route safety scoring.
//!
//! Combines four independently-sourced risk signals into one aggregate
//! score and categorical level. The signal source is a trait so live
//! night/weather/crime/road lookups can replace the sampled heuristic
//! without touching the combination rule.

use rand::Rng;

use crate::model::{RiskProfile, RouteSafetyScore, SafetyLevel};

/// Upper bounds of the four component ranges.
pub const NIGHT_RISK_MAX: f64 = 0.4;
pub const WEATHER_RISK_MAX: f64 = 0.3;
pub const CRIME_RISK_MAX: f64 = 0.5;
pub const ROAD_RISK_MAX: f64 = 0.4;

/// Sum of all component maxima; normalizes the aggregate score.
const TOTAL_RISK_SCALE: f64 = 1.6;

// Per-component thresholds above which a risk factor is reported.
// Comparisons are strictly greater-than: a component exactly at its
// threshold reports nothing.
const NIGHT_RISK_THRESHOLD: f64 = 0.25;
const WEATHER_RISK_THRESHOLD: f64 = 0.2;
const CRIME_RISK_THRESHOLD: f64 = 0.3;
const ROAD_RISK_THRESHOLD: f64 = 0.25;

/// Supplies the four risk components for a named route.
pub trait RiskSignalSource {
    fn assess(&mut self, route_name: &str) -> RiskProfile;
}

/// Reference source drawing every component uniformly from its range.
#[derive(Debug, Clone)]
pub struct SimulatedRiskSource<R> {
    rng: R,
}

impl<R: Rng> SimulatedRiskSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RiskSignalSource for SimulatedRiskSource<R> {
    fn assess(&mut self, _route_name: &str) -> RiskProfile {
        RiskProfile {
            night: self.rng.gen_range(0.0..NIGHT_RISK_MAX),
            weather: self.rng.gen_range(0.0..WEATHER_RISK_MAX),
            crime: self.rng.gen_range(0.0..CRIME_RISK_MAX),
            road: self.rng.gen_range(0.0..ROAD_RISK_MAX),
        }
    }
}

/// Combines a risk profile into the aggregate safety score for a route.
///
/// `score = 1 - min(1, total / 1.6)`, clamped to [0, 1]; level is HIGH
/// above 0.75, MEDIUM above 0.45, LOW otherwise.
pub fn score_route(route_name: &str, risks: &RiskProfile) -> RouteSafetyScore {
    let total = risks.night + risks.weather + risks.crime + risks.road;
    let safety_score = (1.0 - (total / TOTAL_RISK_SCALE).min(1.0)).clamp(0.0, 1.0);

    let mut risk_factors = Vec::new();
    if risks.night > NIGHT_RISK_THRESHOLD {
        risk_factors.push("Low street lights / night visibility risk".to_string());
    }
    if risks.weather > WEATHER_RISK_THRESHOLD {
        risk_factors.push("Bad weather on route".to_string());
    }
    if risks.crime > CRIME_RISK_THRESHOLD {
        risk_factors.push("High crime density zone".to_string());
    }
    if risks.road > ROAD_RISK_THRESHOLD {
        risk_factors.push("Poor road conditions reported".to_string());
    }

    let safety_level = if safety_score > 0.75 {
        SafetyLevel::High
    } else if safety_score > 0.45 {
        SafetyLevel::Medium
    } else {
        SafetyLevel::Low
    };

    RouteSafetyScore {
        route_name: route_name.to_string(),
        safety_score,
        safety_level,
        risk_factors,
        night_risk: risks.night,
        weather_risk: risks.weather,
        crime_risk: risks.crime,
        road_condition_risk: risks.road,
    }
}

/// Assesses and scores a route in one step.
pub fn score_route_with(
    source: &mut dyn RiskSignalSource,
    route_name: &str,
) -> RouteSafetyScore {
    let risks = source.assess(route_name);
    score_route(route_name, &risks)
}

//! Route-recommendation response contract for the external LLM service.
//!
//! The engine does not call the model itself; it defines the JSON shape a
//! response must parse into and the fixed-shape fallback substituted when
//! parsing fails. Downstream consumers rely on the shape never being
//! absent, so the fallback is a contract, not an error path.

use log::warn;
use serde::{Deserialize, Serialize};

use super::TravelSummary;

/// Confidence reported when the model response could not be used.
const FALLBACK_CONFIDENCE: f64 = 0.4;

/// Structured route recommendation, camelCase on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteRecommendation {
    pub route_name: String,
    pub confidence: f64,
    pub reason: String,
    pub eta_minutes: f64,
    pub distance_km: f64,
    pub duration_min: f64,
    pub traffic_score: f64,
    pub weather_score: f64,
    pub alternatives: Vec<String>,
}

/// Parses a raw model response, substituting the fixed fallback built from
/// the aggregated inputs whenever the response is not valid JSON for the
/// contract.
pub fn recommendation_from_response(raw: &str, summary: &TravelSummary) -> RouteRecommendation {
    match serde_json::from_str(raw.trim()) {
        Ok(recommendation) => recommendation,
        Err(e) => {
            warn!("Unparseable route recommendation ({e}) - using fallback");
            fallback_recommendation(summary)
        }
    }
}

/// The fixed-shape fallback: raw aggregated numbers, a constant
/// confidence of 0.4 and placeholder alternatives.
pub fn fallback_recommendation(summary: &TravelSummary) -> RouteRecommendation {
    let duration_min = summary.duration_min();

    RouteRecommendation {
        route_name: "Fallback Route".to_string(),
        confidence: FALLBACK_CONFIDENCE,
        reason: "AI JSON parsing failed; fallback values used.".to_string(),
        eta_minutes: duration_min,
        distance_km: summary.distance_km(),
        duration_min,
        traffic_score: summary.traffic_score,
        weather_score: summary.weather_score,
        alternatives: vec!["Route A".to_string(), "Route B".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> TravelSummary {
        TravelSummary {
            distance_m: 12_000.0,
            duration_s: 1_080.0,
            traffic_score: 0.6,
            weather_score: 0.3,
        }
    }

    #[test]
    fn well_formed_response_parses() {
        let raw = r#"{
            "routeName": "NH 44 via ring road",
            "confidence": 0.87,
            "reason": "Light traffic, clear weather",
            "etaMinutes": 21.5,
            "distanceKm": 12.0,
            "durationMin": 18.0,
            "trafficScore": 0.6,
            "weatherScore": 0.3,
            "alternatives": ["Inner ring", "Old highway"]
        }"#;

        let rec = recommendation_from_response(raw, &summary());

        assert_eq!(rec.route_name, "NH 44 via ring road");
        assert_eq!(rec.confidence, 0.87);
        assert_eq!(rec.alternatives.len(), 2);
    }

    #[test]
    fn malformed_response_falls_back() {
        let rec = recommendation_from_response("Sorry, I cannot help with that.", &summary());

        assert_eq!(rec.route_name, "Fallback Route");
        assert_eq!(rec.confidence, 0.4);
        assert_eq!(rec.distance_km, 12.0);
        assert_eq!(rec.duration_min, 18.0);
        assert_eq!(rec.eta_minutes, 18.0);
        assert_eq!(rec.traffic_score, 0.6);
        assert_eq!(rec.weather_score, 0.3);
        assert_eq!(rec.alternatives, vec!["Route A", "Route B"]);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_string(&fallback_recommendation(&summary())).unwrap();
        assert!(json.contains("\"routeName\""));
        assert!(json.contains("\"etaMinutes\""));
        assert!(json.contains("\"trafficScore\""));
    }
}

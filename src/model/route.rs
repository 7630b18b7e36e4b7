//! Synthesized route candidates ready for serialization and rendering.

use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde::Serialize;
use serde_json::json;

use crate::Error;
use crate::directions::Instruction;

/// One named route alternative with its rendering geometry and turn-by-turn
/// instructions.
///
/// Candidates are created per request, immutable thereafter, serialized to
/// the caller and discarded.
#[derive(Debug, Clone, Serialize)]
pub struct RouteCandidate {
    pub route_name: String,
    pub total_distance_km: f64,
    pub total_duration_min: f64,
    /// Path coordinates in `[lat, lng]` order, the convention of the map
    /// rendering layer (note: the opposite of the (lon, lat) polyline
    /// input order).
    pub coordinates: Vec<[f64; 2]>,
    pub instructions: Vec<Instruction>,
}

impl RouteCandidate {
    /// Converts the candidate to a `GeoJSON` `FeatureCollection` holding a
    /// single LineString feature with the route's summary properties.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let coords: Vec<geo::Coord<f64>> = self
            .coordinates
            .iter()
            .map(|&[lat, lng]| geo::Coord { x: lng, y: lat })
            .collect();
        let geometry = Geometry::new(GeoJsonValue::from(&geo::LineString::new(coords)));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "route_name": self.route_name,
                "total_distance_km": self.total_distance_km,
                "total_duration_min": self.total_duration_min,
                "instruction_count": self.instructions.len(),
            }
        });

        let feature: Feature =
            serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))?;

        Ok(FeatureCollection {
            features: vec![feature],
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

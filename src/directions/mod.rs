//! Turn-by-turn instruction generation.
//!
//! Walks a path segment by segment, aggregating near-straight runs into
//! single "continue" steps and emitting a turn instruction whenever the
//! cumulative bearing change exceeds a threshold.

use itertools::Itertools;
use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::geometry::{bearing_deg, bearing_delta_deg, distance_m, normalize_bearing};
use crate::model::RouteGraph;

/// Bearing change above which a full turn is emitted, degrees
const TURN_THRESHOLD_DEG: f64 = 30.0;
/// Bearing change between this and the turn threshold counts as a slight turn
const SLIGHT_TURN_DEG: f64 = 15.0;
/// Segments shorter than this fold into the running step without steering
const MIN_SEGMENT_M: f64 = 10.0;
/// Weight of the newest segment when smoothing the running bearing
const BEARING_BLEND: f64 = 0.4;

/// A single navigation directive.
#[derive(Debug, Clone, Serialize)]
pub struct Instruction {
    pub text: String,
    /// Distance covered by this instruction in meters
    pub distance_m: f64,
    /// Travel bearing for this instruction, degrees clockwise from north
    pub bearing_deg: f64,
}

/// Generates human-readable turn-by-turn instructions for a path.
///
/// The first instruction is a "Head ..." directive, the last an arrival
/// directive with zero distance. Paths shorter than two nodes produce no
/// instructions. Excluding the arrival entry, instruction distances sum to
/// the total path distance.
pub fn generate_directions(graph: &RouteGraph, path: &[NodeIndex]) -> Vec<Instruction> {
    let points = graph.path_points(path);
    if points.len() < 2 {
        return Vec::new();
    }

    let segments: Vec<(f64, f64)> = points
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| (distance_m(a, b), bearing_deg(a, b)))
        .collect();

    let mut instructions = Vec::new();
    let mut accumulated_m = 0.0;
    let mut current_bearing = segments[0].1;
    let mut departed = false;

    for &(segment_m, segment_bearing) in &segments {
        // Over-dense sampling noise: keep the distance, ignore the steering
        if segment_m < MIN_SEGMENT_M {
            accumulated_m += segment_m;
            continue;
        }

        let delta = bearing_delta_deg(current_bearing, segment_bearing);

        if delta.abs() <= SLIGHT_TURN_DEG {
            accumulated_m += segment_m;
            // Smooth the reference direction along the shortest arc for
            // stability against sampling noise
            current_bearing = normalize_bearing(current_bearing + BEARING_BLEND * delta);
        } else {
            if accumulated_m > 0.0 {
                instructions.push(running_instruction(current_bearing, accumulated_m, departed));
                departed = true;
            }
            instructions.push(turn_instruction(delta, segment_m, segment_bearing));
            departed = true;
            accumulated_m = 0.0;
            current_bearing = segment_bearing;
        }
    }

    if accumulated_m > 0.0 {
        instructions.push(running_instruction(current_bearing, accumulated_m, departed));
    }

    instructions.push(Instruction {
        text: "You have arrived at your destination".to_string(),
        distance_m: 0.0,
        bearing_deg: current_bearing,
    });

    instructions
}

/// "Head ..." for the first step of a route, "Continue ..." afterwards.
fn running_instruction(bearing: f64, distance_m: f64, departed: bool) -> Instruction {
    let verb = if departed { "Continue" } else { "Head" };
    let text = format!(
        "{verb} {} for {}",
        compass_direction(bearing),
        humanize_distance(distance_m)
    );

    Instruction {
        text,
        distance_m,
        bearing_deg: bearing,
    }
}

fn turn_instruction(delta_deg: f64, distance_m: f64, bearing: f64) -> Instruction {
    // Positive delta is a clockwise change, i.e. a right turn
    let side = if delta_deg > 0.0 { "right" } else { "left" };
    let action = if delta_deg.abs() > TURN_THRESHOLD_DEG {
        "Turn"
    } else {
        "Slight"
    };
    let text = format!(
        "{action} {side} and continue {} for {}",
        compass_direction(bearing),
        humanize_distance(distance_m)
    );

    Instruction {
        text,
        distance_m,
        bearing_deg: bearing,
    }
}

/// Maps a bearing to one of eight coarse compass words.
pub fn compass_direction(bearing: f64) -> &'static str {
    const CARDINALS: [&str; 8] = [
        "north",
        "northeast",
        "east",
        "southeast",
        "south",
        "southwest",
        "west",
        "northwest",
    ];

    let idx = (normalize_bearing(bearing) / 45.0).round() as usize % 8;
    CARDINALS[idx]
}

/// Renders meters below 1000 as whole meters, anything longer as
/// kilometers with one decimal.
pub fn humanize_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{meters:.0} m")
    }
}

//! Canned service responses.

use serde_json::{Value, json};

use super::washington_dc_locations::*;

pub fn step(instruction: &str, kind: &str, at: &Location, distance: f64, duration: f64) -> Value {
    json!({
        "name": "",
        "distance": distance,
        "duration": duration,
        "geometry": { "type": "LineString", "coordinates": [at.position()] },
        "maneuver": {
            "instruction": instruction,
            "type": kind,
            "location": at.position()
        }
    })
}

pub fn leg(from: &Location, to: &Location, distance: f64, duration: f64) -> Value {
    json!({
        "summary": format!("{} to {}", from.name, to.name),
        "distance": distance,
        "duration": duration,
        "steps": [
            step(&format!("Head toward {}", to.name), "depart", from, distance, duration),
            step(&format!("You have arrived at {}", to.name), "arrive", to, 0.0, 0.0),
        ]
    })
}

/// Routing response from the Mapbox office to the White House.
pub fn mapbox_to_white_house() -> Value {
    json!({
        "code": "Ok",
        "waypoints": [
            { "name": "Florida Avenue Northwest", "location": MAPBOX_DC.position() },
            { "name": "", "location": WHITE_HOUSE.position() }
        ],
        "routes": [{
            "distance": 1500.0,
            "duration": 300.0,
            "voiceLocale": "en-US",
            "geometry": {
                "type": "LineString",
                "coordinates": [MAPBOX_DC.position(), FARRAGUT_SQUARE.position(), WHITE_HOUSE.position()]
            },
            "legs": [leg(&MAPBOX_DC, &WHITE_HOUSE, 1500.0, 300.0)]
        }]
    })
}

fn tracepoint(at: &Location, waypoint_index: usize, matchings_index: usize) -> Value {
    json!({
        "location": at.position(),
        "alternatives_count": 1,
        "waypoint_index": waypoint_index,
        "matchings_index": matchings_index,
        "name": "16th Street Northwest"
    })
}

/// Matching response over the 16th Street trace with the middle sample
/// unmatched, encoded as polyline geometry.
pub fn sixteenth_street_match(geometry: &str) -> Value {
    let trace = SIXTEENTH_STREET_TRACE;
    json!({
        "code": "Ok",
        "tracepoints": [tracepoint(&trace[0], 0, 0), null, tracepoint(&trace[2], 1, 0)],
        "matchings": [{
            "confidence": 0.87,
            "distance": 1620.4,
            "duration": 245.0,
            "geometry": geometry,
            "legs": [
                leg(&trace[0], &trace[1], 810.2, 122.5),
                leg(&trace[1], &trace[2], 810.2, 122.5)
            ]
        }]
    })
}

/// A trace the service split into two disjoint matches.
pub fn split_match() -> Value {
    let trace = SIXTEENTH_STREET_TRACE;
    json!({
        "code": "Ok",
        "tracepoints": [tracepoint(&trace[0], 0, 0), tracepoint(&trace[1], 1, 0), tracepoint(&trace[2], 0, 1)],
        "matchings": [
            {
                "confidence": 0.4,
                "distance": 810.2,
                "duration": 122.5,
                "legs": [leg(&trace[0], &trace[1], 810.2, 122.5)]
            },
            {
                "confidence": 0.9,
                "distance": 0.0,
                "duration": 0.0,
                "legs": []
            }
        ]
    })
}

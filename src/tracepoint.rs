//! Tracepoints: where each raw input location landed on the road network.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::json;
use crate::options::Waypoint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracepoint {
    pub coordinate: Coordinate,
    /// Number of candidate roads considered for this input location.
    pub alternate_count: usize,
    /// Waypoint index the service assigned to this point.
    pub waypoint_index: usize,
    /// Which match this point belongs to when the trace was split.
    pub matching_index: usize,
    /// Road name exactly as the service sent it, empty string included.
    pub name: Option<String>,
}

impl Tracepoint {
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = json::as_object(value, "tracepoints")?;
        Ok(Self {
            coordinate: json::required_position(object, "location")?,
            alternate_count: json::required_usize(object, "alternatives_count")?,
            waypoint_index: json::required_usize(object, "waypoint_index")?,
            matching_index: json::required_usize(object, "matchings_index")?,
            name: json::optional_str(object, "name")?.map(str::to_string),
        })
    }
}

/// Decodes the positional `tracepoints` array, one slot per input
/// location. `null` entries are locations the service could not match.
pub fn tracepoints_from_json(
    entries: &[Value],
    inputs: &[Waypoint],
) -> Result<Vec<Option<Tracepoint>>> {
    if entries.len() != inputs.len() {
        warn!(
            tracepoints = entries.len(),
            inputs = inputs.len(),
            "tracepoint count differs from input locations, truncating"
        );
    }

    entries
        .iter()
        .take(inputs.len())
        .map(|entry| match entry {
            Value::Null => Ok(None),
            entry => Tracepoint::from_json(entry).map(Some),
        })
        .collect()
}

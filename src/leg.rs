//! Legs and steps, keyed positionally to the request's endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::geometry;
use crate::json;
use crate::options::{Profile, Waypoint};
use crate::tracepoint::Tracepoint;

/// One end of a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Endpoint {
    Waypoint(Waypoint),
    Tracepoint(Tracepoint),
    /// An input location the matcher could not place on the network.
    Unmatched(Waypoint),
}

impl Endpoint {
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Endpoint::Waypoint(waypoint) | Endpoint::Unmatched(waypoint) => waypoint.coordinate,
            Endpoint::Tracepoint(tracepoint) => tracepoint.coordinate,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Endpoint::Waypoint(waypoint) | Endpoint::Unmatched(waypoint) => waypoint.name.as_deref(),
            Endpoint::Tracepoint(tracepoint) => tracepoint.name.as_deref(),
        }
    }

    pub fn is_matched(&self) -> bool {
        !matches!(self, Endpoint::Unmatched(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// e.g. `depart`, `turn`, `arrive`.
    pub kind: String,
    pub modifier: Option<String>,
    pub location: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instructions: String,
    pub maneuver: Maneuver,
    /// Name of the road travelled on, if any.
    pub name: Option<String>,
    pub distance: f64,
    pub duration: f64,
    pub coordinates: Option<Vec<Coordinate>>,
}

impl RouteStep {
    pub fn from_json(value: &Value, precision: f64) -> Result<Self> {
        let object = json::as_object(value, "steps")?;
        let maneuver = json::required_object(object, "maneuver")?;

        Ok(Self {
            instructions: json::required_str(maneuver, "instruction")?.to_string(),
            maneuver: Maneuver {
                kind: json::required_str(maneuver, "type")?.to_string(),
                modifier: json::optional_str(maneuver, "modifier")?.map(str::to_string),
                location: json::required_position(maneuver, "location")?,
            },
            name: json::optional_str(object, "name")?
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            distance: json::required_f64(object, "distance")?,
            duration: json::required_f64(object, "duration")?,
            coordinates: geometry::resolve(object.get("geometry"), precision)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub source: Endpoint,
    pub destination: Endpoint,
    pub steps: Vec<RouteStep>,
    /// Summary of the most significant roads, if the service sent one.
    pub name: Option<String>,
    pub distance: f64,
    pub expected_travel_time: f64,
    pub profile: Profile,
}

impl RouteLeg {
    pub fn from_json(
        value: &Value,
        source: Endpoint,
        destination: Endpoint,
        profile: &Profile,
        precision: f64,
    ) -> Result<Self> {
        let object = json::as_object(value, "legs")?;
        let steps = json::optional_array(object, "steps")?
            .iter()
            .map(|step| RouteStep::from_json(step, precision))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source,
            destination,
            steps,
            name: json::optional_str(object, "summary")?
                .filter(|summary| !summary.is_empty())
                .map(str::to_string),
            distance: json::required_f64(object, "distance")?,
            expected_travel_time: json::required_f64(object, "duration")?,
            profile: profile.clone(),
        })
    }
}

/// Pairs each endpoint with its successor: `(e[0], e[1]), (e[1], e[2]), ...`.
pub fn adjacent_pairs<T>(endpoints: &[T]) -> impl Iterator<Item = (&T, &T)> {
    endpoints.iter().zip(endpoints.iter().skip(1))
}

/// Builds legs from the JSON `legs` array. Leg `k` runs from
/// `endpoints[k]` to `endpoints[k + 1]`; if the counts disagree the
/// shorter side wins.
pub fn assemble_legs(
    legs: &[Value],
    endpoints: &[Endpoint],
    profile: &Profile,
    precision: f64,
) -> Result<Vec<RouteLeg>> {
    let slots = endpoints.len().saturating_sub(1);
    if legs.len() != slots {
        warn!(
            legs = legs.len(),
            endpoint_pairs = slots,
            "leg count differs from endpoint pairs, truncating"
        );
    }

    let assembled = adjacent_pairs(endpoints)
        .zip(legs)
        .map(|((source, destination), leg)| {
            RouteLeg::from_json(leg, source.clone(), destination.clone(), profile, precision)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(legs = assembled.len(), "assembled route legs");
    Ok(assembled)
}

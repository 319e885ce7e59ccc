//! Routes and matches assembled from service responses.
//!
//! A [`Match`] has everything a [`Route`] has plus a confidence score, so
//! both embed a [`RouteCore`] and share one decoder. They differ only in
//! where leg endpoints come from: the request's waypoints for routes, the
//! response's tracepoints for matches.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::{DirectionsError, Result};
use crate::geometry;
use crate::json::{self, JsonObject};
use crate::leg::{Endpoint, RouteLeg, assemble_legs};
use crate::options::{MatchingOptions, Profile, RouteOptions, Waypoint};
use crate::tracepoint::{Tracepoint, tracepoints_from_json};
use crate::traits::DirectionsOptions;

/// Fields shared by routes and matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCore {
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub expected_travel_time: f64,
    pub legs: Vec<RouteLeg>,
    pub coordinates: Option<Vec<Coordinate>>,
    /// IETF language tag for spoken instructions.
    pub speech_locale: Option<String>,
}

impl RouteCore {
    pub fn coordinate_count(&self) -> usize {
        self.coordinates.as_ref().map_or(0, Vec::len)
    }
}

/// Where leg endpoints come from.
#[derive(Debug, Clone, Copy)]
pub enum EndpointSource<'a> {
    Waypoints(&'a [Waypoint]),
    /// Positional tracepoints; `None` slots fall back to the input
    /// location at the same index.
    Tracepoints {
        tracepoints: &'a [Option<Tracepoint>],
        inputs: &'a [Waypoint],
    },
}

impl EndpointSource<'_> {
    pub fn endpoints(&self) -> Vec<Endpoint> {
        match *self {
            EndpointSource::Waypoints(waypoints) => {
                waypoints.iter().cloned().map(Endpoint::Waypoint).collect()
            }
            EndpointSource::Tracepoints {
                tracepoints,
                inputs,
            } => tracepoints
                .iter()
                .zip(inputs)
                .map(|(tracepoint, input)| match tracepoint {
                    Some(tracepoint) => Endpoint::Tracepoint(tracepoint.clone()),
                    None => Endpoint::Unmatched(input.clone()),
                })
                .collect(),
        }
    }
}

/// Decodes the fields common to routes and matches.
pub fn decode_core(
    object: &Map<String, Value>,
    source: EndpointSource<'_>,
    profile: &Profile,
    precision: f64,
) -> Result<RouteCore> {
    let distance = json::required_f64(object, "distance")?;
    let expected_travel_time = json::required_f64(object, "duration")?;
    let coordinates = geometry::resolve(object.get("geometry"), precision)?;
    let speech_locale = json::optional_str(object, "voiceLocale")?.map(str::to_string);

    let endpoints = source.endpoints();
    let legs = assemble_legs(
        json::optional_array(object, "legs")?,
        &endpoints,
        profile,
        precision,
    )?;

    Ok(RouteCore {
        distance,
        expected_travel_time,
        legs,
        coordinates,
        speech_locale,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(flatten)]
    pub core: RouteCore,
}

impl Route {
    /// Decodes one element of a routing response's `routes` array. Legs
    /// are keyed to the request's waypoints.
    pub fn from_json(value: &Value, options: &impl DirectionsOptions) -> Result<Self> {
        let object = json::as_object(value, "routes")?;
        let core = decode_core(
            object,
            EndpointSource::Waypoints(options.waypoints()),
            options.profile(),
            options.shape_precision(),
        )?;
        Ok(Self { core })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(flatten)]
    pub core: RouteCore,
    /// Between 0 and 1; higher means the matched path more likely
    /// reflects the path actually travelled.
    pub confidence: f64,
}

impl Match {
    /// Decodes one element of a matching response's `matchings` array.
    /// Legs are keyed to adjacent tracepoint pairs.
    pub fn from_json(
        value: &Value,
        tracepoints: &[Option<Tracepoint>],
        options: &MatchingOptions,
    ) -> Result<Self> {
        let object = json::as_object(value, "matchings")?;
        let core = decode_core(
            object,
            EndpointSource::Tracepoints {
                tracepoints,
                inputs: options.waypoints(),
            },
            options.profile(),
            options.shape_precision(),
        )?;
        let confidence = json::required_f64(object, "confidence")?;
        Ok(Self { core, confidence })
    }
}

/// Fails with the service's own error when `code` is present and not `Ok`.
fn check_code(object: &JsonObject) -> Result<()> {
    match json::optional_str(object, "code")? {
        Some(code) if code != "Ok" => Err(DirectionsError::Service {
            code: code.to_string(),
            message: json::optional_str(object, "message")?.map(str::to_string),
        }),
        _ => Ok(()),
    }
}

/// Decodes a routing response into named waypoints and routes.
///
/// Waypoint coordinates come from the response (snapped to the network);
/// names come from the response when non-empty, else from the request.
pub fn parse_route_response(
    value: &Value,
    options: &RouteOptions,
) -> Result<(Vec<Waypoint>, Vec<Route>)> {
    let object = json::as_object(value, "response")?;
    check_code(object)?;

    let api_waypoints = json::optional_array(object, "waypoints")?;
    let waypoints = if api_waypoints.is_empty() {
        options.waypoints().to_vec()
    } else {
        api_waypoints
            .iter()
            .zip(options.waypoints())
            .map(|(api, local)| -> Result<Waypoint> {
                let api = json::as_object(api, "waypoints")?;
                let name = json::optional_str(api, "name")?
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .or_else(|| local.name.clone());
                Ok(Waypoint {
                    coordinate: json::required_position(api, "location")?,
                    name,
                })
            })
            .collect::<Result<Vec<_>>>()?
    };

    let routes = json::required_array(object, "routes")?
        .par_iter()
        .map(|route| Route::from_json(route, options))
        .collect::<Result<Vec<_>>>()?;

    debug!(routes = routes.len(), "decoded route response");
    Ok((waypoints, routes))
}

/// Decodes a matching response into positional tracepoints and matches.
/// All matches share the same tracepoint list.
pub fn parse_matching_response(
    value: &Value,
    options: &MatchingOptions,
) -> Result<(Vec<Option<Tracepoint>>, Vec<Match>)> {
    let object = json::as_object(value, "response")?;
    check_code(object)?;

    let tracepoints = tracepoints_from_json(
        json::required_array(object, "tracepoints")?,
        options.waypoints(),
    )?;

    let matches = json::required_array(object, "matchings")?
        .par_iter()
        .map(|matching| Match::from_json(matching, &tracepoints, options))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        tracepoints = tracepoints.len(),
        unmatched = tracepoints.iter().filter(|t| t.is_none()).count(),
        matches = matches.len(),
        "decoded matching response"
    );
    Ok((tracepoints, matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use serde_json::json;

    fn waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint::named(Coordinate::new(38.9131752, -77.0324047), "Mapbox"),
            Waypoint::named(Coordinate::new(38.8977, -77.0365), "White House"),
        ]
    }

    #[test]
    fn test_route_from_json() {
        let options = RouteOptions::new(waypoints(), Profile::Driving);
        let value = json!({
            "distance": 1500.0,
            "duration": 300.0,
            "geometry": "_p~iF~ps|U_ulLnnqC",
            "voiceLocale": "en-US",
            "legs": [{ "distance": 1500.0, "duration": 300.0, "summary": "", "steps": [] }]
        });
        let route = Route::from_json(&value, &options).unwrap();
        assert_eq!(route.core.distance, 1500.0);
        assert_eq!(route.core.expected_travel_time, 300.0);
        assert_eq!(route.core.coordinate_count(), 2);
        assert_eq!(route.core.speech_locale.as_deref(), Some("en-US"));
        assert_eq!(route.core.legs.len(), 1);
        assert_eq!(
            route.core.legs[0].source,
            Endpoint::Waypoint(waypoints()[0].clone())
        );
    }

    #[test]
    fn test_wrong_typed_duration_fails() {
        let options = RouteOptions::new(waypoints(), Profile::Driving);
        let value = json!({ "distance": 1.0, "duration": "5 min" });
        assert!(matches!(
            Route::from_json(&value, &options),
            Err(DirectionsError::Decode(DecodeError::WrongType { .. }))
        ));
    }

    #[test]
    fn test_unmatched_slots_fall_back_to_inputs() {
        let inputs = waypoints();
        let tracepoints = vec![None, None];
        let endpoints = EndpointSource::Tracepoints {
            tracepoints: &tracepoints,
            inputs: &inputs,
        }
        .endpoints();
        assert_eq!(endpoints, vec![
            Endpoint::Unmatched(inputs[0].clone()),
            Endpoint::Unmatched(inputs[1].clone()),
        ]);
        assert!(!endpoints[0].is_matched());
    }

    #[test]
    fn test_service_error_code() {
        let options = RouteOptions::new(waypoints(), Profile::Driving);
        let value = json!({ "code": "NoRoute", "message": "No route found", "routes": [] });
        match parse_route_response(&value, &options) {
            Err(DirectionsError::Service { code, message }) => {
                assert_eq!(code, "NoRoute");
                assert_eq!(message.as_deref(), Some("No route found"));
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_confidence_fails() {
        let options = MatchingOptions::new(
            waypoints().into_iter().map(|w| w.coordinate).collect(),
            Profile::Driving,
        );
        let value = json!({ "distance": 1.0, "duration": 1.0, "legs": [] });
        assert!(matches!(
            Match::from_json(&value, &[None, None], &options),
            Err(DirectionsError::Decode(DecodeError::MissingField { ref field })) if field == "confidence"
        ));
    }
}

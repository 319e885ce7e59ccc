//! Request descriptors for routing and map matching.
//!
//! Both option types are built once, then only read: the same instance
//! drives URL construction and, later, response decoding (which needs the
//! original waypoints and profile to key legs).

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::ConfigurationError;
use crate::polyline::DEFAULT_PRECISION;
use crate::traits::DirectionsOptions;

/// Travel mode / cost model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Profile {
    #[default]
    Driving,
    DrivingTraffic,
    Walking,
    Cycling,
    /// Any other `owner/name` identifier.
    Custom(String),
}

impl Profile {
    pub fn identifier(&self) -> &str {
        match self {
            Profile::Driving => "mapbox/driving",
            Profile::DrivingTraffic => "mapbox/driving-traffic",
            Profile::Walking => "mapbox/walking",
            Profile::Cycling => "mapbox/cycling",
            Profile::Custom(identifier) => identifier,
        }
    }
}

/// A user-specified stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub coordinate: Coordinate,
    pub name: Option<String>,
}

impl Waypoint {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            name: None,
        }
    }

    pub fn named(coordinate: Coordinate, name: impl Into<String>) -> Self {
        Self {
            coordinate,
            name: Some(name.into()),
        }
    }
}

/// Shape format requested for route geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeometryFormat {
    #[default]
    Polyline,
    Polyline6,
    GeoJson,
}

impl GeometryFormat {
    pub fn param_value(self) -> &'static str {
        match self {
            GeometryFormat::Polyline => "polyline",
            GeometryFormat::Polyline6 => "polyline6",
            GeometryFormat::GeoJson => "geojson",
        }
    }

    /// Decode precision for polyline strings in this format. GeoJSON
    /// responses never carry strings, but the default is harmless there.
    pub fn precision(self) -> f64 {
        match self {
            GeometryFormat::Polyline6 => 1e6,
            GeometryFormat::Polyline | GeometryFormat::GeoJson => DEFAULT_PRECISION,
        }
    }
}

/// How much of the overall route geometry to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Overview {
    #[default]
    Full,
    Simplified,
    None,
}

impl Overview {
    pub fn param_value(self) -> &'static str {
        match self {
            Overview::Full => "full",
            Overview::Simplified => "simplified",
            Overview::None => "false",
        }
    }
}

/// Describes a routing request between ordered waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    waypoints: Vec<Waypoint>,
    profile: Profile,
    includes_steps: bool,
    includes_alternatives: bool,
    geometry_format: GeometryFormat,
    overview: Overview,
    continue_straight: Option<bool>,
}

impl RouteOptions {
    pub fn new(waypoints: Vec<Waypoint>, profile: Profile) -> Self {
        Self {
            waypoints,
            profile,
            includes_steps: false,
            includes_alternatives: false,
            geometry_format: GeometryFormat::default(),
            overview: Overview::default(),
            continue_straight: None,
        }
    }

    pub fn with_steps(mut self, includes_steps: bool) -> Self {
        self.includes_steps = includes_steps;
        self
    }

    pub fn with_alternatives(mut self, includes_alternatives: bool) -> Self {
        self.includes_alternatives = includes_alternatives;
        self
    }

    pub fn with_geometry_format(mut self, geometry_format: GeometryFormat) -> Self {
        self.geometry_format = geometry_format;
        self
    }

    pub fn with_overview(mut self, overview: Overview) -> Self {
        self.overview = overview;
        self
    }

    pub fn with_continue_straight(mut self, continue_straight: bool) -> Self {
        self.continue_straight = Some(continue_straight);
        self
    }

    pub fn includes_steps(&self) -> bool {
        self.includes_steps
    }

    pub fn includes_alternatives(&self) -> bool {
        self.includes_alternatives
    }

    pub fn geometry_format(&self) -> GeometryFormat {
        self.geometry_format
    }

    pub fn overview(&self) -> Overview {
        self.overview
    }
}

/// Builds `<endpoint>/v5/<profile>/<lon,lat;...>.json`.
fn coordinate_path(
    endpoint: &str,
    profile: &Profile,
    waypoints: &[Waypoint],
) -> Result<String, ConfigurationError> {
    if waypoints.is_empty() {
        return Err(ConfigurationError::NoWaypoints);
    }

    let coords = waypoints
        .iter()
        .map(|waypoint| waypoint.coordinate.query_component())
        .collect::<Vec<_>>()
        .join(";");

    Ok(format!("{}/v5/{}/{}.json", endpoint, profile.identifier(), coords))
}

/// Query parameters for a routing request, in wire order.
pub fn route_params(options: &RouteOptions) -> Vec<(String, String)> {
    let mut params = vec![
        (
            "alternatives".to_string(),
            options.includes_alternatives.to_string(),
        ),
        (
            "geometries".to_string(),
            options.geometry_format.param_value().to_string(),
        ),
        (
            "overview".to_string(),
            options.overview.param_value().to_string(),
        ),
        ("steps".to_string(), options.includes_steps.to_string()),
    ];
    if let Some(continue_straight) = options.continue_straight {
        params.push((
            "continue_straight".to_string(),
            continue_straight.to_string(),
        ));
    }
    params
}

impl DirectionsOptions for RouteOptions {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    fn path(&self) -> Result<String, ConfigurationError> {
        coordinate_path("directions", &self.profile, &self.waypoints)
    }

    fn params(&self) -> Vec<(String, String)> {
        route_params(self)
    }

    fn shape_precision(&self) -> f64 {
        self.geometry_format.precision()
    }
}

/// Describes a map-matching request over a trace of raw locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingOptions {
    base: RouteOptions,
    timestamps: Option<Vec<DateTime<Utc>>>,
    resample_traces: bool,
    waypoint_indices: Option<BTreeSet<usize>>,
}

impl MatchingOptions {
    pub fn new(coordinates: Vec<Coordinate>, profile: Profile) -> Self {
        let waypoints = coordinates.into_iter().map(Waypoint::new).collect();
        Self {
            base: RouteOptions::new(waypoints, profile),
            timestamps: None,
            resample_traces: false,
            waypoint_indices: None,
        }
    }

    /// Builds options from locations captured at known times.
    pub fn from_timed_locations(
        locations: impl IntoIterator<Item = (Coordinate, DateTime<Utc>)>,
        profile: Profile,
    ) -> Self {
        let (coordinates, timestamps): (Vec<_>, Vec<_>) = locations.into_iter().unzip();
        let mut options = Self::new(coordinates, profile);
        options.timestamps = Some(timestamps);
        options
    }

    /// Attaches one capture time per input location.
    pub fn with_timestamps(
        mut self,
        timestamps: Vec<DateTime<Utc>>,
    ) -> Result<Self, ConfigurationError> {
        let waypoints = self.base.waypoints.len();
        if timestamps.len() != waypoints {
            return Err(ConfigurationError::TimestampCountMismatch {
                timestamps: timestamps.len(),
                waypoints,
            });
        }
        self.timestamps = Some(timestamps);
        Ok(self)
    }

    pub fn with_resample_traces(mut self, resample_traces: bool) -> Self {
        self.resample_traces = resample_traces;
        self
    }

    /// Restricts leg boundaries to the given input indices. Including the
    /// first and last index yields a single leg over the whole trace.
    pub fn with_waypoint_indices(
        mut self,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<Self, ConfigurationError> {
        let count = self.base.waypoints.len();
        let indices: BTreeSet<usize> = indices.into_iter().collect();
        if let Some(&index) = indices.iter().find(|&&index| index >= count) {
            return Err(ConfigurationError::WaypointIndexOutOfRange { index, count });
        }
        self.waypoint_indices = Some(indices);
        Ok(self)
    }

    pub fn with_steps(mut self, includes_steps: bool) -> Self {
        self.base = self.base.with_steps(includes_steps);
        self
    }

    pub fn with_geometry_format(mut self, geometry_format: GeometryFormat) -> Self {
        self.base = self.base.with_geometry_format(geometry_format);
        self
    }

    pub fn with_overview(mut self, overview: Overview) -> Self {
        self.base = self.base.with_overview(overview);
        self
    }

    pub fn route_options(&self) -> &RouteOptions {
        &self.base
    }

    pub fn resample_traces(&self) -> bool {
        self.resample_traces
    }

    pub fn timestamps(&self) -> Option<&[DateTime<Utc>]> {
        self.timestamps.as_deref()
    }

    pub fn waypoint_indices(&self) -> Option<&BTreeSet<usize>> {
        self.waypoint_indices.as_ref()
    }
}

/// Query parameters for a matching request: the routing parameters
/// followed by the matching-specific ones.
pub fn matching_params(options: &MatchingOptions) -> Vec<(String, String)> {
    let mut params = route_params(&options.base);

    params.push(("tidy".to_string(), options.resample_traces.to_string()));

    if let Some(timestamps) = options.timestamps.as_ref().filter(|t| !t.is_empty()) {
        let value = timestamps
            .iter()
            .map(|timestamp| timestamp.timestamp().to_string())
            .collect::<Vec<_>>()
            .join(";");
        params.push(("timestamps".to_string(), value));
    }

    if let Some(indices) = &options.waypoint_indices {
        let value = indices
            .iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(",");
        params.push(("waypoints".to_string(), value));
    }

    params
}

impl DirectionsOptions for MatchingOptions {
    fn profile(&self) -> &Profile {
        &self.base.profile
    }

    fn waypoints(&self) -> &[Waypoint] {
        &self.base.waypoints
    }

    fn path(&self) -> Result<String, ConfigurationError> {
        coordinate_path("matching", &self.base.profile, &self.base.waypoints)
    }

    fn params(&self) -> Vec<(String, String)> {
        matching_params(self)
    }

    fn shape_precision(&self) -> f64 {
        self.base.shape_precision()
    }
}

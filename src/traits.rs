//! Seams between the decoder core and its collaborators.
//!
//! Request descriptors implement [`DirectionsOptions`]; anything that can
//! carry a request to the service and hand back its JSON implements
//! [`Transport`].

use serde_json::Value;

use crate::error::{ConfigurationError, Result};
use crate::options::{Profile, Waypoint};

/// A request descriptor: routing or map matching.
pub trait DirectionsOptions {
    /// Travel mode used to compute the result.
    fn profile(&self) -> &Profile;

    /// Input locations, in request order.
    fn waypoints(&self) -> &[Waypoint];

    /// Path relative to the service root, e.g.
    /// `directions/v5/mapbox/driving/-77.03,38.91;-77.04,38.90.json`.
    fn path(&self) -> std::result::Result<String, ConfigurationError>;

    /// Ordered query parameters.
    fn params(&self) -> Vec<(String, String)>;

    /// Precision for polyline geometries in the response.
    fn shape_precision(&self) -> f64;
}

/// Issues a GET for `path` with `params` and returns the decoded JSON body.
pub trait Transport {
    fn get_json(&self, path: &str, params: &[(String, String)]) -> Result<Value>;
}

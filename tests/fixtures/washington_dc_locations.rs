//! Washington, DC locations used across the decoding tests.

use route_decoder::coordinate::Coordinate;
use route_decoder::options::Waypoint;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    pub fn waypoint(&self) -> Waypoint {
        Waypoint::named(self.coordinate(), self.name)
    }

    /// GeoJSON `[lng, lat]`, as the service writes it.
    pub fn position(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

pub const MAPBOX_DC: Location = Location::new("Mapbox", 38.9131752, -77.0324047);
pub const WHITE_HOUSE: Location = Location::new("White House", 38.8977, -77.0365);
pub const FARRAGUT_SQUARE: Location = Location::new("Farragut Square", 38.9020, -77.0390);
pub const DUPONT_CIRCLE: Location = Location::new("Dupont Circle", 38.9096, -77.0434);

/// A short northbound-to-southbound trace along 16th Street NW.
pub const SIXTEENTH_STREET_TRACE: &[Location] = &[
    Location::new("16th & U", 38.9170, -77.0366),
    Location::new("16th & P", 38.9097, -77.0365),
    Location::new("16th & K", 38.9024, -77.0366),
];

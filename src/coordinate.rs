//! Geographic coordinates in decimal degrees.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair. No altitude, no normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a coordinate from a GeoJSON position (`[longitude, latitude]`).
    pub fn from_geojson(position: [f64; 2]) -> Self {
        Self::new(position[1], position[0])
    }

    /// GeoJSON position order: `[longitude, latitude]`.
    pub fn to_geojson(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// `lon,lat` as used in request paths.
    pub fn query_component(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Converts a `(latitude, longitude)` tuple.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_swaps_order() {
        let coordinate = Coordinate::from_geojson([-77.0365, 38.8977]);
        assert_eq!(coordinate.latitude, 38.8977);
        assert_eq!(coordinate.longitude, -77.0365);
        assert_eq!(coordinate.to_geojson(), [-77.0365, 38.8977]);
    }

    #[test]
    fn test_query_component_keeps_input_digits() {
        let coordinate = Coordinate::new(38.9131752, -77.0324047);
        assert_eq!(coordinate.query_component(), "-77.0324047,38.9131752");
    }
}

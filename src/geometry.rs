//! Resolution of the polymorphic `geometry` field.
//!
//! The service sends route and step geometry either as a GeoJSON
//! LineString object or as an encoded polyline string, depending on the
//! `geometries` request parameter. Anything else is treated as absent.

use serde_json::Value;

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::json;
use crate::polyline;

/// A geometry field classified at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    GeoJson(Vec<Coordinate>),
    Polyline(String),
    Absent,
}

impl Geometry {
    pub fn from_json(field: Option<&Value>) -> Result<Self> {
        Ok(match field {
            Some(Value::Object(object)) => {
                let positions = json::required_array(object, "coordinates")?;
                let coordinates = positions
                    .iter()
                    .map(|position| json::position(position, "coordinates"))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Geometry::GeoJson(coordinates)
            }
            Some(Value::String(encoded)) => Geometry::Polyline(encoded.clone()),
            _ => Geometry::Absent,
        })
    }

    /// Decoded coordinates, with polyline strings read at `precision`.
    pub fn into_coordinates(self, precision: f64) -> Result<Option<Vec<Coordinate>>> {
        match self {
            Geometry::GeoJson(coordinates) => Ok(Some(coordinates)),
            Geometry::Polyline(encoded) => Ok(Some(polyline::decode(&encoded, precision)?)),
            Geometry::Absent => Ok(None),
        }
    }
}

/// Resolves a geometry field to an ordered coordinate sequence.
pub fn resolve(field: Option<&Value>, precision: f64) -> Result<Option<Vec<Coordinate>>> {
    Geometry::from_json(field)?.into_coordinates(precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, DirectionsError};
    use serde_json::json;

    #[test]
    fn test_geojson_object_preserves_order() {
        let field = json!({
            "type": "LineString",
            "coordinates": [[-77.0324047, 38.9131752], [-77.0365, 38.8977]]
        });
        let coordinates = resolve(Some(&field), 1e5).unwrap().unwrap();
        assert_eq!(
            coordinates,
            vec![
                Coordinate::new(38.9131752, -77.0324047),
                Coordinate::new(38.8977, -77.0365),
            ]
        );
    }

    #[test]
    fn test_polyline_string_matches_codec() {
        let field = json!("_p~iF~ps|U_ulLnnqC_mqNvxq`@");
        let resolved = resolve(Some(&field), 1e5).unwrap().unwrap();
        let decoded = polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", 1e5).unwrap();
        assert_eq!(resolved, decoded);
    }

    #[test]
    fn test_unrecognized_shapes_are_absent() {
        for field in [json!(42), json!([1, 2]), json!(true), Value::Null] {
            assert_eq!(resolve(Some(&field), 1e5).unwrap(), None);
        }
        assert_eq!(resolve(None, 1e5).unwrap(), None);
    }

    #[test]
    fn test_malformed_polyline_is_decode_error() {
        let field = json!("_p~iF");
        assert!(matches!(
            resolve(Some(&field), 1e5),
            Err(DirectionsError::Decode(DecodeError::MalformedPolyline { .. }))
        ));
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            Geometry::from_json(Some(&json!("abc"))).unwrap(),
            Geometry::Polyline("abc".to_string())
        );
        assert_eq!(
            Geometry::from_json(Some(&json!({ "coordinates": [] }))).unwrap(),
            Geometry::GeoJson(vec![])
        );
    }
}

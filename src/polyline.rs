//! Polyline representation for route geometries.
//!
//! Route geometries arrive either as GeoJSON coordinate arrays or as
//! encoded polyline strings: signed deltas between consecutive points,
//! scaled by a decimal precision, written as base64-ish 5-bit chunks.
//! `encode`/`decode` convert between the two at the boundary; the rest of
//! the crate works with decoded coordinates.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::PolylineError;

/// Five decimal digits, the service default for `geometries=polyline`.
pub const DEFAULT_PRECISION: f64 = 1e5;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string at `precision`.
    pub fn from_encoded(text: &str, precision: f64) -> Result<Self, PolylineError> {
        decode(text, precision).map(Self::new)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn encoded(&self, precision: f64) -> Result<String, PolylineError> {
        encode(&self.points, precision)
    }
}

fn check_precision(precision: f64) -> Result<(), PolylineError> {
    // NaN fails this comparison too.
    if precision > 0.0 {
        Ok(())
    } else {
        Err(PolylineError::NonPositivePrecision(precision))
    }
}

/// Largest magnitude a scaled coordinate may have. Deltas between two
/// such values still zigzag-encode without losing bits.
const MAX_SCALED: f64 = (1u64 << 60) as f64;

fn scale(value: f64, precision: f64, index: usize) -> Result<i64, PolylineError> {
    let scaled = (value * precision).round();
    if !scaled.is_finite() || scaled.abs() >= MAX_SCALED {
        return Err(PolylineError::Unencodable { index });
    }
    Ok(scaled as i64)
}

/// Encodes coordinates as a polyline string. Fails if a coordinate,
/// scaled by `precision`, does not fit the encoding's integer range.
pub fn encode(coordinates: &[Coordinate], precision: f64) -> Result<String, PolylineError> {
    check_precision(precision)?;

    let mut output = String::new();
    let mut previous = (0i64, 0i64);
    for (index, coordinate) in coordinates.iter().enumerate() {
        let lat = scale(coordinate.latitude, precision, index)?;
        let lng = scale(coordinate.longitude, precision, index)?;
        let unencodable = || PolylineError::Unencodable { index };
        encode_value(lat.checked_sub(previous.0).ok_or_else(unencodable)?, &mut output);
        encode_value(lng.checked_sub(previous.1).ok_or_else(unencodable)?, &mut output);
        previous = (lat, lng);
    }
    Ok(output)
}

fn encode_value(delta: i64, output: &mut String) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };
    while value >= 0x20 {
        output.push(char::from((((value & 0x1f) | 0x20) + 63) as u8));
        value >>= 5;
    }
    output.push(char::from((value + 63) as u8));
}

/// Decodes a polyline string. Fails on any byte outside the encoding
/// alphabet, a value that never terminates, a latitude without its
/// longitude, or deltas whose running sum overflows; no partial output is
/// returned.
pub fn decode(text: &str, precision: f64) -> Result<Vec<Coordinate>, PolylineError> {
    check_precision(precision)?;

    let bytes = text.as_bytes();
    let mut position = 0;
    let mut coordinates = Vec::new();
    let mut lat = 0i64;
    let mut lng = 0i64;

    while position < bytes.len() {
        lat = lat
            .checked_add(decode_value(bytes, &mut position)?)
            .ok_or(PolylineError::Malformed { position })?;
        if position >= bytes.len() {
            return Err(PolylineError::Malformed { position });
        }
        lng = lng
            .checked_add(decode_value(bytes, &mut position)?)
            .ok_or(PolylineError::Malformed { position })?;
        coordinates.push(Coordinate::new(
            lat as f64 / precision,
            lng as f64 / precision,
        ));
    }
    Ok(coordinates)
}

fn decode_value(bytes: &[u8], position: &mut usize) -> Result<i64, PolylineError> {
    let mut result = 0i64;
    let mut shift = 0u32;
    loop {
        let Some(&byte) = bytes.get(*position) else {
            return Err(PolylineError::Malformed {
                position: *position,
            });
        };
        if !(63..=126).contains(&byte) || shift > 60 {
            return Err(PolylineError::Malformed {
                position: *position,
            });
        }
        *position += 1;

        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }
    Ok(if result & 1 == 1 { !(result >> 1) } else { result >> 1 })
}

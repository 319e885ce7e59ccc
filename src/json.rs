//! Typed accessors over `serde_json::Value` objects.
//!
//! Required fields fail with `DecodeError` when missing or wrong-typed;
//! optional ones treat `null` and absence alike but still reject a
//! present value of the wrong type.

use serde_json::{Map, Value};

use crate::coordinate::Coordinate;
use crate::error::DecodeError;

pub(crate) type JsonObject = Map<String, Value>;

fn missing(field: &str) -> DecodeError {
    DecodeError::MissingField {
        field: field.to_string(),
    }
}

fn wrong_type(field: &str, expected: &'static str) -> DecodeError {
    DecodeError::WrongType {
        field: field.to_string(),
        expected,
    }
}

pub(crate) fn as_object<'a>(value: &'a Value, field: &str) -> Result<&'a JsonObject, DecodeError> {
    value.as_object().ok_or_else(|| wrong_type(field, "an object"))
}

fn present<'a>(object: &'a JsonObject, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|value| !value.is_null())
}

pub(crate) fn required_f64(object: &JsonObject, field: &str) -> Result<f64, DecodeError> {
    present(object, field)
        .ok_or_else(|| missing(field))?
        .as_f64()
        .ok_or_else(|| wrong_type(field, "a number"))
}

pub(crate) fn required_usize(object: &JsonObject, field: &str) -> Result<usize, DecodeError> {
    let value = present(object, field).ok_or_else(|| missing(field))?;
    value
        .as_u64()
        .and_then(|value| usize::try_from(value).ok())
        .ok_or_else(|| wrong_type(field, "a non-negative integer"))
}

pub(crate) fn required_str<'a>(object: &'a JsonObject, field: &str) -> Result<&'a str, DecodeError> {
    present(object, field)
        .ok_or_else(|| missing(field))?
        .as_str()
        .ok_or_else(|| wrong_type(field, "a string"))
}

pub(crate) fn optional_str<'a>(
    object: &'a JsonObject,
    field: &str,
) -> Result<Option<&'a str>, DecodeError> {
    present(object, field)
        .map(|value| value.as_str().ok_or_else(|| wrong_type(field, "a string")))
        .transpose()
}

pub(crate) fn required_array<'a>(
    object: &'a JsonObject,
    field: &str,
) -> Result<&'a [Value], DecodeError> {
    present(object, field)
        .ok_or_else(|| missing(field))?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| wrong_type(field, "an array"))
}

/// Absent or `null` arrays read as empty.
pub(crate) fn optional_array<'a>(
    object: &'a JsonObject,
    field: &str,
) -> Result<&'a [Value], DecodeError> {
    match present(object, field) {
        Some(value) => value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| wrong_type(field, "an array")),
        None => Ok(&[]),
    }
}

pub(crate) fn required_object<'a>(
    object: &'a JsonObject,
    field: &str,
) -> Result<&'a JsonObject, DecodeError> {
    as_object(present(object, field).ok_or_else(|| missing(field))?, field)
}

/// Reads a GeoJSON `[longitude, latitude]` position.
pub(crate) fn position(value: &Value, field: &str) -> Result<Coordinate, DecodeError> {
    let pair = value
        .as_array()
        .filter(|pair| pair.len() >= 2)
        .ok_or_else(|| wrong_type(field, "a [longitude, latitude] pair"))?;
    match (pair[0].as_f64(), pair[1].as_f64()) {
        (Some(longitude), Some(latitude)) => Ok(Coordinate::from_geojson([longitude, latitude])),
        _ => Err(wrong_type(field, "a [longitude, latitude] pair")),
    }
}

pub(crate) fn required_position(object: &JsonObject, field: &str) -> Result<Coordinate, DecodeError> {
    position(present(object, field).ok_or_else(|| missing(field))?, field)
}

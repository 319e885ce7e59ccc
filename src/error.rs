//! Error taxonomy for request building, transport and response decoding.

use thiserror::Error;

/// Invalid use of request options, detected before any network call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("request has no waypoints")]
    NoWaypoints,
    #[error("polyline precision must be positive, got {0}")]
    NonPositivePrecision(f64),
    #[error("waypoint index {index} is out of range for {count} locations")]
    WaypointIndexOutOfRange { index: usize, count: usize },
    #[error("coordinate {index} cannot be polyline-encoded at the requested precision")]
    UnencodableCoordinate { index: usize },
    #[error("{timestamps} timestamps given for {waypoints} locations")]
    TimestampCountMismatch { timestamps: usize, waypoints: usize },
}

/// A response could not be turned into a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("missing required field `{field}`")]
    MissingField { field: String },
    #[error("field `{field}` is not {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
    #[error("malformed polyline at byte {position}")]
    MalformedPolyline { position: usize },
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}

/// Errors from the polyline codec.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolylineError {
    #[error("polyline precision must be positive, got {0}")]
    NonPositivePrecision(f64),
    #[error("unterminated or invalid polyline value at byte {position}")]
    Malformed { position: usize },
    #[error("coordinate {index} is out of range for the polyline precision")]
    Unencodable { index: usize },
}

#[derive(Error, Debug)]
pub enum DirectionsError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned `{code}`{}", message_suffix(.message))]
    Service {
        code: String,
        message: Option<String>,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl From<PolylineError> for DirectionsError {
    fn from(err: PolylineError) -> Self {
        match err {
            PolylineError::NonPositivePrecision(precision) => {
                ConfigurationError::NonPositivePrecision(precision).into()
            }
            PolylineError::Malformed { position } => {
                DecodeError::MalformedPolyline { position }.into()
            }
            PolylineError::Unencodable { index } => {
                ConfigurationError::UnencodableCoordinate { index }.into()
            }
        }
    }
}

impl From<serde_json::Error> for DirectionsError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::InvalidJson(err.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, DirectionsError>;

//! route-decoder
//!
//! Request descriptors and response decoders for a directions / map
//! matching service: routes, legs, steps and tracepoints rebuilt from the
//! service's JSON.

pub mod traits;
pub mod error;
pub mod coordinate;
pub mod polyline;
pub mod geometry;
pub mod options;
pub mod tracepoint;
pub mod leg;
pub mod route;
pub mod persist;
pub mod client;
mod json;

pub use error::{ConfigurationError, DecodeError, DirectionsError, PolylineError, Result};

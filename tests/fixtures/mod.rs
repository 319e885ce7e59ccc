//! Test fixtures for route-decoder.
//!
//! Provides:
//! - Real Washington, DC locations (from OpenStreetMap)
//! - Canned service responses built around them

#![allow(dead_code)]

pub mod washington_dc_locations;
pub mod responses;

pub use washington_dc_locations::*;

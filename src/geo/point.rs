//! Coordinate pair in decimal degrees
//!
//! A record's location is either a concrete `GeoPoint` or absent.
//! Older data encoded "unknown location" as the pair `(0, 0)`; that
//! sentinel is interpreted exactly once, in [`GeoPoint::from_raw`],
//! and everything downstream branches on presence instead.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Degrees north, -90 to 90
    pub lat: f64,
    /// Degrees east, -180 to 180
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point from known-good coordinates.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Interpret a raw coordinate pair, mapping the legacy `(0, 0)`
    /// "unknown location" sentinel to `None`.
    pub fn from_raw(lat: f64, lng: f64) -> Option<Self> {
        if lat == 0.0 && lng == 0.0 {
            None
        } else {
            Some(Self { lat, lng })
        }
    }
}

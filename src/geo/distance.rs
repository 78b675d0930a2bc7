//! Great-circle distance between two coordinate pairs
//!
//! Uses the haversine formula on a spherical Earth. Deterministic and
//! side-effect free; non-finite inputs propagate through the arithmetic.

use super::point::GeoPoint;

/// Earth's mean radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the great-circle distance between two points, in kilometres.
///
/// Satisfies symmetry (`distance_km(a, b) == distance_km(b, a)`) and
/// identity (`distance_km(a, a)` is zero within floating-point tolerance).
///
/// # Example
///
/// ```
/// use geodir::geo::{distance_km, GeoPoint};
///
/// let equator = GeoPoint::new(0.0, 0.0);
/// let north = GeoPoint::new(1.0, 0.0);
/// let dist = distance_km(equator, north);
/// assert!((dist - 111.2).abs() < 1.0); // one degree of latitude
/// ```
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

//! Geographic primitives for geodir
//!
//! Provides the coordinate type used by directory records and the
//! great-circle distance used for proximity filtering and ranking.

mod distance;
mod point;

pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use point::GeoPoint;

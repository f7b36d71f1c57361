//! Math Helpers.
//!
//! - [`angles`]: angle normalization and degree/radian conversion.
//! - [`geo`]: great-circle distance, bearing and midpoint on a spherical Earth.
//! - [`rounding`]: decimal-precision and step rounding, clamping.
//! - [`numbers`]: gcd, lcm, interpolation.
//! - [`coords`]: cartesian and polar coordinates.

pub mod angles;
pub mod coords;
pub mod geo;
pub mod numbers;
pub mod rounding;

pub use angles::{normalize_degrees, normalize_radians, normalize_signed_degrees};
pub use coords::{cartesian_to_polar, polar_to_cartesian, Cartesian, Polar};
pub use geo::{bearing, distance_meters, haversine, GeoPoint, EARTH_RADIUS_METERS};
pub use numbers::{gcd, lcm};
pub use rounding::{ceil_to, clamp, floor_to, round_to, round_to_step};

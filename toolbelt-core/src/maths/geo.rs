//! Geodesy on a spherical Earth.
//!
//! Great-circle distance (haversine), initial bearing and midpoint between two
//! latitude/longitude pairs expressed in degrees.

use serde::{Deserialize, Serialize};

use super::angles::normalize_degrees;
use crate::error::ToolbeltError;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A position on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point, checking that latitude is within `[-90, 90]` and
    /// longitude within `[-180, 180]`.
    ///
    /// # Errors
    ///
    /// [`ToolbeltError::InvalidArgument`] for out-of-range or non-finite coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ToolbeltError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ToolbeltError::InvalidArgument(format!(
                "latitude {} is outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ToolbeltError::InvalidArgument(format!(
                "longitude {} is outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self { latitude, longitude })
    }
}

/// Great-circle distance between `a` and `b` on a sphere of `radius`.
///
/// The result is in the unit of `radius`.
pub fn haversine(a: GeoPoint, b: GeoPoint, radius: f64) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = phi2 - phi1;
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push h marginally above 1 for antipodal points.
    2.0 * radius * h.min(1.0).sqrt().asin()
}

/// Great-circle distance in meters using [`EARTH_RADIUS_METERS`].
///
/// ```
/// use toolbelt_core::maths::geo::{distance_meters, GeoPoint};
/// let paris = GeoPoint::new(48.8566, 2.3522).unwrap();
/// let london = GeoPoint::new(51.5074, -0.1278).unwrap();
/// assert!((distance_meters(paris, london) - 343_556.0).abs() < 1.0);
/// ```
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    haversine(a, b, EARTH_RADIUS_METERS)
}

/// Initial bearing from `a` towards `b`, in degrees within `[0, 360)`.
pub fn bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Point halfway along the great circle between `a` and `b`.
pub fn midpoint(a: GeoPoint, b: GeoPoint) -> GeoPoint {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let lambda1 = a.longitude.to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let bx = phi2.cos() * delta_lambda.cos();
    let by = phi2.cos() * delta_lambda.sin();
    let phi3 = (phi1.sin() + phi2.sin()).atan2(((phi1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lambda3 = lambda1 + by.atan2(phi1.cos() + bx);

    GeoPoint {
        latitude: phi3.to_degrees(),
        longitude: super::angles::normalize_signed_degrees(lambda3.to_degrees()),
    }
}

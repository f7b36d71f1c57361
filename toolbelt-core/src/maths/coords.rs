//! Cartesian and polar coordinates in the plane.
//!
//! Polar angles are in radians, measured counter-clockwise from the positive
//! x axis, and normalized into `[0, 2π)` when produced by a conversion.

use serde::{Deserialize, Serialize};

use super::angles::normalize_radians;

/// A point given by its `x` and `y` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
}

/// A point given by its distance from the origin and its angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Polar {
    pub radius: f64,
    pub angle: f64,
}

impl Cartesian {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Polar {
    pub fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }
}

/// Converts cartesian coordinates to polar ones.
///
/// The origin maps to a zero radius and a zero angle.
///
/// ```
/// use toolbelt_core::maths::{cartesian_to_polar, Cartesian};
/// let p = cartesian_to_polar(Cartesian::new(0.0, 2.0));
/// assert!((p.radius - 2.0).abs() < 1e-12);
/// assert!((p.angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn cartesian_to_polar(point: Cartesian) -> Polar {
    Polar {
        radius: point.x.hypot(point.y),
        angle: normalize_radians(point.y.atan2(point.x)),
    }
}

/// Converts polar coordinates to cartesian ones.
///
/// A negative radius points in the opposite direction of `angle`.
pub fn polar_to_cartesian(point: Polar) -> Cartesian {
    Cartesian {
        x: point.radius * point.angle.cos(),
        y: point.radius * point.angle.sin(),
    }
}

impl From<Cartesian> for Polar {
    fn from(point: Cartesian) -> Self {
        cartesian_to_polar(point)
    }
}

impl From<Polar> for Cartesian {
    fn from(point: Polar) -> Self {
        polar_to_cartesian(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, PI};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_cartesian_to_polar_quadrants() {
        let p = cartesian_to_polar(Cartesian::new(1.0, 1.0));
        assert_close(p.radius, 2f64.sqrt());
        assert_close(p.angle, FRAC_PI_4);

        let p = cartesian_to_polar(Cartesian::new(-1.0, 0.0));
        assert_close(p.radius, 1.0);
        assert_close(p.angle, PI);

        let p = cartesian_to_polar(Cartesian::new(0.0, -3.0));
        assert_close(p.radius, 3.0);
        assert_close(p.angle, 1.5 * PI);
    }

    #[test]
    fn test_cartesian_to_polar_origin() {
        assert_eq!(cartesian_to_polar(Cartesian::default()), Polar::new(0.0, 0.0));
    }

    #[test]
    fn test_polar_to_cartesian() {
        let c = polar_to_cartesian(Polar::new(2.0, PI / 2.0));
        assert_close(c.x, 0.0);
        assert_close(c.y, 2.0);

        let c = polar_to_cartesian(Polar::new(-1.0, 0.0));
        assert_close(c.x, -1.0);
        assert_close(c.y, 0.0);
    }

    #[test]
    fn test_from_conversions_agree() {
        let original = Cartesian::new(-3.0, 4.0);
        let polar: Polar = original.into();
        assert_close(polar.radius, 5.0);
        let back: Cartesian = polar.into();
        assert_close(back.x, original.x);
        assert_close(back.y, original.y);
    }
}

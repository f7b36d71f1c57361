//! Angle normalization.

use std::f64::consts::TAU;

/// Normalizes an angle in degrees into `[0, 360)`.
///
/// # Examples
///
/// ```
/// use toolbelt_core::maths::angles::normalize_degrees;
/// assert_eq!(normalize_degrees(370.0), 10.0);
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// ```
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Normalizes an angle in degrees into `(-180, 180]`.
pub fn normalize_signed_degrees(angle: f64) -> f64 {
    let normalized = normalize_degrees(angle);
    if normalized > 180.0 {
        normalized - 360.0
    } else {
        normalized
    }
}

/// Normalizes an angle in radians into `[0, 2π)`.
pub fn normalize_radians(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(359.5, 359.5)]
    #[case(720.0, 0.0)]
    #[case(-1.0, 359.0)]
    #[case(-720.0, 0.0)]
    fn test_normalize_degrees(#[case] input: f64, #[case] expected: f64) {
        assert!((normalize_degrees(input) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_degrees_tiny_negative_stays_in_range() {
        let value = normalize_degrees(-1e-15);
        assert!((0.0..360.0).contains(&value));
    }

    #[rstest]
    #[case(180.0, 180.0)]
    #[case(-180.0, 180.0)]
    #[case(190.0, -170.0)]
    #[case(-190.0, 170.0)]
    #[case(45.0, 45.0)]
    fn test_normalize_signed_degrees(#[case] input: f64, #[case] expected: f64) {
        assert!((normalize_signed_degrees(input) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_radians() {
        assert!((normalize_radians(3.0 * PI) - PI).abs() < 1e-12);
        assert!((normalize_radians(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert_eq!(normalize_radians(0.0), 0.0);
    }

    #[test]
    fn test_degree_radian_conversion() {
        assert!((to_radians(180.0) - PI).abs() < 1e-12);
        assert!((to_degrees(PI / 2.0) - 90.0).abs() < 1e-12);
    }
}

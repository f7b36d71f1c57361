//! Rounding helpers.
//!
//! `precision` counts decimal places; a negative precision rounds to tens,
//! hundreds, and so on. Halves round away from zero.

use crate::error::ToolbeltError;

/// Values the scaling would push out of the finite range are returned as is.
fn apply(value: f64, precision: i32, op: fn(f64) -> f64) -> f64 {
    let factor = 10f64.powi(precision.saturating_abs());
    if !factor.is_finite() {
        return value;
    }
    let scaled = if precision >= 0 { value * factor } else { value / factor };
    if !scaled.is_finite() {
        return value;
    }
    if precision >= 0 {
        op(scaled) / factor
    } else {
        op(scaled) * factor
    }
}

/// Rounds `value` to `precision` decimal places.
///
/// ```
/// use toolbelt_core::maths::round_to;
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(1234.5, -2), 1200.0);
/// ```
pub fn round_to(value: f64, precision: i32) -> f64 {
    apply(value, precision, f64::round)
}

/// Rounds `value` down to `precision` decimal places.
pub fn floor_to(value: f64, precision: i32) -> f64 {
    apply(value, precision, f64::floor)
}

/// Rounds `value` up to `precision` decimal places.
pub fn ceil_to(value: f64, precision: i32) -> f64 {
    apply(value, precision, f64::ceil)
}

/// Rounds `value` to the nearest multiple of `step`.
///
/// # Errors
///
/// [`ToolbeltError::InvalidArgument`] unless `step` is finite and strictly positive.
pub fn round_to_step(value: f64, step: f64) -> Result<f64, ToolbeltError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ToolbeltError::InvalidArgument(format!(
            "step must be a positive finite number, got {}",
            step
        )));
    }
    Ok((value / step).round() * step)
}

/// Restricts `value` to the `[min, max]` range. Reversed bounds are swapped.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let (low, high) = if min > max { (max, min) } else { (min, max) };
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3.14159, 2, 3.14)]
    #[case(2.5, 0, 3.0)]
    #[case(-2.5, 0, -3.0)]
    #[case(1234.5678, -2, 1200.0)]
    #[case(1250.0, -2, 1300.0)]
    #[case(0.0, 3, 0.0)]
    fn test_round_to(#[case] value: f64, #[case] precision: i32, #[case] expected: f64) {
        assert!((round_to(value, precision) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_floor_and_ceil_to() {
        assert!((floor_to(1.239, 2) - 1.23).abs() < 1e-9);
        assert!((ceil_to(1.231, 2) - 1.24).abs() < 1e-9);
        assert!((floor_to(-1.231, 2) + 1.24).abs() < 1e-9);
        assert_eq!(ceil_to(1201.0, -2), 1300.0);
        assert_eq!(floor_to(1299.0, -2), 1200.0);
    }

    #[test]
    fn test_round_to_extreme_precision_keeps_value() {
        assert_eq!(round_to(1e300, 10), 1e300);
        assert_eq!(round_to(1.5, 400), 1.5);
        assert_eq!(floor_to(2.25, i32::MAX), 2.25);
        assert_eq!(ceil_to(7.0, -400), 7.0);
        assert_eq!(round_to(f64::MAX, 1), f64::MAX);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_round_to_step() {
        assert!((round_to_step(7.3, 0.5).unwrap() - 7.5).abs() < 1e-9);
        assert!((round_to_step(14.0, 5.0).unwrap() - 15.0).abs() < 1e-9);
        assert!(matches!(round_to_step(1.0, 0.0), Err(ToolbeltError::InvalidArgument(_))));
        assert!(round_to_step(1.0, -2.0).is_err());
        assert!(round_to_step(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-1, 0, 10), 0);
        assert_eq!(clamp(11, 0, 10), 10);
        assert_eq!(clamp(11, 10, 0), 10, "reversed bounds are swapped");
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }
}

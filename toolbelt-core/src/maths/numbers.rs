//! Integer and interpolation helpers.

use num_traits::{Float, PrimInt};

/// Absolute value, `None` for the unrepresentable `-T::min_value()`.
fn magnitude<T: PrimInt>(value: T) -> Option<T> {
    if value < T::zero() {
        T::zero().checked_sub(&value)
    } else {
        Some(value)
    }
}

/// Greatest common divisor, always non-negative. `gcd(0, 0)` is `0`.
///
/// Works for signed and unsigned primitive integers of any sign. The
/// reduction runs on the signed values, so `T::min_value()` is accepted as
/// long as the result fits: `gcd(i64::MIN, 2)` is `Some(2)`. `None` is
/// returned only when the divisor itself is `-T::min_value()`, as for
/// `gcd(i8::MIN, 0)`.
///
/// ```
/// use toolbelt_core::maths::gcd;
/// assert_eq!(gcd(48, 18), Some(6));
/// assert_eq!(gcd(-48i32, 18), Some(6));
/// assert_eq!(gcd(0u8, 7), Some(7));
/// assert_eq!(gcd(i8::MIN, i8::MIN), None);
/// ```
pub fn gcd<T: PrimInt>(a: T, b: T) -> Option<T> {
    let mut a = a;
    let mut b = b;
    while !b.is_zero() {
        // `checked_div` only fails for `MIN / -1`, whose remainder is 0.
        let remainder = match a.checked_div(&b) {
            Some(quotient) => a - quotient * b,
            None => T::zero(),
        };
        a = b;
        b = remainder;
    }
    magnitude(a)
}

/// Least common multiple, always non-negative. `lcm(0, n)` is `Some(0)`.
///
/// Returns `None` when the result does not fit in `T`.
///
/// ```
/// use toolbelt_core::maths::lcm;
/// assert_eq!(lcm(4, 6), Some(12));
/// assert_eq!(lcm(i32::MAX, i32::MAX - 1), None);
/// ```
pub fn lcm<T: PrimInt>(a: T, b: T) -> Option<T> {
    if a.is_zero() || b.is_zero() {
        return Some(T::zero());
    }
    let divisor = gcd(a, b)?;
    magnitude(a / divisor)?.checked_mul(&magnitude(b)?)
}

/// Linear interpolation between `start` and `end` at ratio `t`.
pub fn interpolate<F: Float>(start: F, end: F, t: F) -> F {
    start + (end - start) * t
}

/// Position of `value` within `[min, max]` as a ratio (0 at `min`, 1 at `max`).
///
/// Returns `None` when `min == max`.
pub fn normalize<F: Float>(value: F, min: F, max: F) -> Option<F> {
    if max == min {
        None
    } else {
        Some((value - min) / (max - min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(48, 18, 6)]
    #[case(18, 48, 6)]
    #[case(17, 5, 1)]
    #[case(0, 9, 9)]
    #[case(9, 0, 9)]
    #[case(0, 0, 0)]
    #[case(-12, -18, 6)]
    #[case(-12, 18, 6)]
    #[case(i64::MIN, 2, 2)]
    #[case(2, i64::MIN, 2)]
    #[case(i64::MIN, -1, 1)]
    #[case(i64::MIN, i64::MAX, 1)]
    fn test_gcd(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
        assert_eq!(gcd(a, b), Some(expected));
    }

    #[test]
    fn test_gcd_unsigned() {
        assert_eq!(gcd(270u32, 192), Some(6));
        assert_eq!(gcd(u64::MAX, u64::MAX), Some(u64::MAX));
    }

    #[test]
    fn test_gcd_unrepresentable() {
        assert_eq!(gcd(i64::MIN, 0), None);
        assert_eq!(gcd(i8::MIN, i8::MIN), None);
        assert_eq!(gcd(i8::MIN, 64), Some(64));
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(-4i32, 6), Some(12));
        assert_eq!(lcm(0u16, 5), Some(0));
        assert_eq!(lcm(21u64, 6), Some(42));
        assert_eq!(lcm(i64::MIN, 2), None);
    }

    #[test]
    fn test_lcm_overflow() {
        assert_eq!(lcm(i32::MAX, i32::MAX - 1), None);
        assert_eq!(lcm(u8::MAX, 2), None);
        assert_eq!(lcm(i8::MIN, 1), None);
        assert_eq!(lcm(64i8, -32), Some(64));
    }

    #[test]
    fn test_interpolate_and_normalize() {
        assert_eq!(interpolate(0.0, 10.0, 0.25), 2.5);
        assert_eq!(interpolate(10.0f32, 20.0, 1.0), 20.0);
        assert_eq!(normalize(5.0, 0.0, 10.0), Some(0.5));
        assert_eq!(normalize(5.0, 3.0, 3.0), None);
    }
}

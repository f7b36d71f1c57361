//! Bitmask Flag Helpers.
//!
//! Integers used as compact sets of boolean options. Every helper is generic
//! over [`num_traits::PrimInt`], so the same functions work for `u8` option
//! bytes as well as `u64` feature masks.
//!
//! # Examples
//!
//! ```
//! use toolbelt_core::bits::{has_flag, set_flag, unset_flag};
//!
//! const READ: u8 = 0b001;
//! const WRITE: u8 = 0b010;
//!
//! let mask = set_flag(READ, WRITE);
//! assert!(has_flag(mask, WRITE));
//! assert!(!has_flag(unset_flag(mask, WRITE), WRITE));
//! ```

use num_traits::PrimInt;

/// Returns `true` when every bit of `flag` is set in `mask`.
///
/// A zero `flag` carries no bits and is never considered set.
pub fn has_flag<T: PrimInt>(mask: T, flag: T) -> bool {
    !flag.is_zero() && (mask & flag) == flag
}

/// Returns `true` when `mask` contains all bits of `flags`.
///
/// Unlike [`has_flag`], an empty `flags` set is trivially contained.
pub fn has_all_flags<T: PrimInt>(mask: T, flags: T) -> bool {
    (mask & flags) == flags
}

/// Returns `true` when `mask` shares at least one bit with `flags`.
pub fn has_any_flag<T: PrimInt>(mask: T, flags: T) -> bool {
    !(mask & flags).is_zero()
}

/// Returns `mask` with the bits of `flag` set.
pub fn set_flag<T: PrimInt>(mask: T, flag: T) -> T {
    mask | flag
}

/// Returns `mask` with the bits of `flag` cleared.
pub fn unset_flag<T: PrimInt>(mask: T, flag: T) -> T {
    mask & !flag
}

/// Returns `mask` with the bits of `flag` flipped.
pub fn toggle_flag<T: PrimInt>(mask: T, flag: T) -> T {
    mask ^ flag
}

/// Sets `flag` when `condition` holds, clears it otherwise.
///
/// # Examples
///
/// ```
/// use toolbelt_core::bits::set_flag_if;
/// assert_eq!(set_flag_if(0b100u32, 0b001, true), 0b101);
/// assert_eq!(set_flag_if(0b101u32, 0b001, false), 0b100);
/// ```
pub fn set_flag_if<T: PrimInt>(mask: T, flag: T, condition: bool) -> T {
    if condition {
        set_flag(mask, flag)
    } else {
        unset_flag(mask, flag)
    }
}

/// Number of bits set in `mask`.
pub fn count_flags<T: PrimInt>(mask: T) -> u32 {
    mask.count_ones()
}

/// Returns `true` when exactly one bit is set (the value is a single flag).
pub fn is_single_flag<T: PrimInt>(value: T) -> bool {
    value.count_ones() == 1
}

/// Splits `mask` into its single-bit flags, lowest bit first.
///
/// # Examples
///
/// ```
/// use toolbelt_core::bits::split_flags;
/// assert_eq!(split_flags(0b1010_0001u8), vec![0b0000_0001, 0b0010_0000, 0b1000_0000]);
/// assert!(split_flags(0u16).is_empty());
/// ```
pub fn split_flags<T: PrimInt>(mask: T) -> Vec<T> {
    let mut remaining = mask;
    let mut flags = Vec::with_capacity(remaining.count_ones() as usize);
    while !remaining.is_zero() {
        let lowest = T::one() << remaining.trailing_zeros() as usize;
        flags.push(lowest);
        remaining = remaining & !lowest;
    }
    flags
}

/// Combines a list of flags into one mask.
pub fn combine_flags<T: PrimInt>(flags: &[T]) -> T {
    flags.iter().fold(T::zero(), |mask, flag| mask | *flag)
}

/// Returns `true` when `mask` has no bits outside of `allowed`.
pub fn is_valid_mask<T: PrimInt>(mask: T, allowed: T) -> bool {
    (mask & !allowed).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const A: u32 = 1;
    const B: u32 = 2;
    const C: u32 = 4;
    const ALL: u32 = A | B | C;

    #[rstest]
    #[case(A | B, A, true)]
    #[case(A | B, C, false)]
    #[case(A | B, A | B, true)]
    #[case(A, A | B, false)]
    #[case(ALL, 0, false)]
    fn test_has_flag(#[case] mask: u32, #[case] flag: u32, #[case] expected: bool) {
        assert_eq!(has_flag(mask, flag), expected);
    }

    #[test]
    fn test_has_all_and_any_flags() {
        assert!(has_all_flags(ALL, A | C));
        assert!(!has_all_flags(A | B, A | C));
        assert!(has_all_flags(A, 0));
        assert!(has_any_flag(A | B, B | C));
        assert!(!has_any_flag(A, B | C));
        assert!(!has_any_flag(ALL, 0));
    }

    #[test]
    fn test_set_unset_toggle_algebra() {
        let mask = set_flag(0u32, A);
        assert_eq!(mask, A);
        assert_eq!(set_flag(mask, A), A, "setting twice is idempotent");
        assert_eq!(unset_flag(ALL, B), A | C);
        assert_eq!(unset_flag(A, B), A, "clearing an absent flag changes nothing");
        assert_eq!(toggle_flag(A, B), A | B);
        assert_eq!(toggle_flag(toggle_flag(A, B), B), A);
    }

    #[test]
    fn test_set_flag_if() {
        assert_eq!(set_flag_if(A, C, true), A | C);
        assert_eq!(set_flag_if(A | C, C, false), A);
    }

    #[test]
    fn test_count_and_single_flag() {
        assert_eq!(count_flags(ALL), 3);
        assert_eq!(count_flags(0u8), 0);
        assert!(is_single_flag(C));
        assert!(!is_single_flag(A | C));
        assert!(!is_single_flag(0u64));
    }

    #[test]
    fn test_split_and_combine_flags() {
        let flags = split_flags(A | C);
        assert_eq!(flags, vec![A, C]);
        assert_eq!(combine_flags(&flags), A | C);
        assert_eq!(combine_flags::<u32>(&[]), 0);
    }

    #[test]
    fn test_split_flags_signed_high_bit() {
        let flags = split_flags(i8::MIN | 1);
        assert_eq!(flags, vec![1, i8::MIN]);
    }

    #[test]
    fn test_is_valid_mask() {
        assert!(is_valid_mask(A | B, ALL));
        assert!(!is_valid_mask(8, ALL));
        assert!(is_valid_mask(0, 0u32));
    }
}

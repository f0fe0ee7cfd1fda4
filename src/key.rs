//! Order-preserving maps from 32-bit scalars to unsigned comparison keys.
//!
//! Signed integers and floats do not sort correctly when their raw bit patterns
//! are compared as `u32`. Each supported domain implements [`SortKey`] with a
//! bit-twiddle that makes `a < b` in the domain equivalent to
//! `a.map_key() < b.map_key()` as unsigned integers. The lookup table is
//! addressed by the high bits of these keys.
//!
//! | Domain | Mapping |
//! |--------|---------|
//! | `u32` | identity |
//! | `i32` | flip the sign bit |
//! | `f32` | flip the sign bit; if it was set, flip every other bit too |
//!
//! Types without an impl cannot be indexed; that is a compile error rather
//! than a runtime check.
//!
//! # References
//!
//! - Michael Herf, "Radix Tricks" (float flip)

use std::ops::RangeInclusive;

const SIGN_BIT: u32 = 0x8000_0000;

/// A 32-bit scalar with a total-order-preserving `u32` surrogate.
///
/// Implementations must satisfy `a < b  =>  a.map_key() < b.map_key()` for
/// every pair the domain's `PartialOrd` can compare.
pub trait SortKey: Copy + PartialOrd {
    /// Maps the value to its unsigned comparison key.
    fn map_key(self) -> u32;

    /// Inclusive range of mapped keys whose values compare equal to `self`.
    ///
    /// A single key for every value except where the domain has several bit
    /// patterns for one value (signed zero).
    #[inline]
    fn key_span(self) -> RangeInclusive<u32> {
        let key = self.map_key();
        key..=key
    }
}

impl SortKey for u32 {
    #[inline]
    fn map_key(self) -> u32 {
        self
    }
}

impl SortKey for i32 {
    #[inline]
    fn map_key(self) -> u32 {
        (self as u32) ^ SIGN_BIT
    }
}

impl SortKey for f32 {
    /// NaN inputs map to keys above `+inf` (positive NaN) or below `-inf`
    /// (negative NaN); their search behavior is unspecified.
    #[inline]
    fn map_key(self) -> u32 {
        let cv = self.to_bits();
        // All ones when the sign bit is set, otherwise just the sign bit.
        let mask = (cv >> 31).wrapping_neg() | SIGN_BIT;
        cv ^ mask
    }

    #[inline]
    fn key_span(self) -> RangeInclusive<u32> {
        if self == 0.0 {
            (-0.0f32).map_key()..=0.0f32.map_key()
        } else {
            let key = self.map_key();
            key..=key
        }
    }
}

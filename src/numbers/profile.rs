// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Representable domains of the fixed-width integer kinds

use crate::error::{Error, ErrorKind};

/// The fixed `[MIN_VALUE, MAX_VALUE]` domain of a declared integer kind,
/// together with the number of random bytes drawn per sampling attempt.
///
/// The named profiles mirror the primitive integer types. A profile is plain
/// data: the same sampler, [`sample_integer`], serves all of them.
///
/// [`sample_integer`]: super::sample_integer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitWidthProfile {
    min: i64,
    max: i64,
    bytes: usize,
}

impl BitWidthProfile {
    /// Signed 8-bit: `[-128, 127]`.
    pub const INT8: Self = Self::define(i8::MIN as i64, i8::MAX as i64, 1);
    /// Unsigned 8-bit: `[0, 255]`.
    pub const UINT8: Self = Self::define(u8::MIN as i64, u8::MAX as i64, 1);
    /// Signed 16-bit: `[-32768, 32767]`.
    pub const INT16: Self = Self::define(i16::MIN as i64, i16::MAX as i64, 2);
    /// Unsigned 16-bit: `[0, 65535]`.
    pub const UINT16: Self = Self::define(u16::MIN as i64, u16::MAX as i64, 2);
    /// Signed 32-bit.
    pub const INT32: Self = Self::define(i32::MIN as i64, i32::MAX as i64, 4);
    /// Unsigned 32-bit.
    pub const UINT32: Self = Self::define(u32::MIN as i64, u32::MAX as i64, 4);
    /// Signed 64-bit. Any value may be used as a bound, but the range between
    /// the bounds is still limited to [`MAX_BITS`](super::MAX_BITS) bits.
    pub const INT64: Self = Self::define(i64::MIN, i64::MAX, 8);

    const fn define(min: i64, max: i64, bytes: usize) -> Self {
        BitWidthProfile { min, max, bytes }
    }

    /// Construct a profile for an arbitrary domain `[min_value, max_value]`.
    ///
    /// The byte width is the smallest that covers the span of the domain.
    pub fn new(min_value: i64, max_value: i64) -> Result<Self, Error> {
        if !(min_value <= max_value) {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "profile min_value must be <= max_value",
            ));
        }
        let span = (max_value as i128 - min_value as i128) as u128;
        let bits = 128 - span.leading_zeros() as usize;
        let bytes = ((bits + 7) / 8).max(1);
        Ok(Self::define(min_value, max_value, bytes))
    }

    /// The smallest value of the domain.
    #[inline]
    pub const fn min_value(&self) -> i64 {
        self.min
    }

    /// The largest value of the domain.
    #[inline]
    pub const fn max_value(&self) -> i64 {
        self.max
    }

    /// Number of random bytes drawn per attempt.
    #[inline]
    pub const fn bytes(&self) -> usize {
        self.bytes
    }

    /// Whether `value` lies within the domain.
    #[inline]
    pub fn contains(&self, value: i128) -> bool {
        self.min as i128 <= value && value <= self.max as i128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_profiles_match_primitive_types() {
        assert_eq!(BitWidthProfile::UINT8.min_value(), 0);
        assert_eq!(BitWidthProfile::UINT8.max_value(), 255);
        assert_eq!(BitWidthProfile::INT16.min_value(), -32768);
        assert_eq!(BitWidthProfile::INT16.max_value(), 32767);
        assert_eq!(BitWidthProfile::UINT32.max_value(), 4_294_967_295);
        assert_eq!(BitWidthProfile::INT32.bytes(), 4);
        assert_eq!(BitWidthProfile::INT64.bytes(), 8);
    }

    #[test]
    fn custom_profile_picks_covering_width() {
        assert_eq!(BitWidthProfile::new(5, 5).unwrap().bytes(), 1);
        assert_eq!(BitWidthProfile::new(0, 255).unwrap().bytes(), 1);
        assert_eq!(BitWidthProfile::new(0, 256).unwrap().bytes(), 2);
        assert_eq!(BitWidthProfile::new(-1, 1 << 40).unwrap().bytes(), 6);
        assert_eq!(BitWidthProfile::new(i64::MIN, i64::MAX).unwrap().bytes(), 8);
    }

    #[test]
    fn custom_profile_rejects_inverted_domain() {
        let err = BitWidthProfile::new(10, 9).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn contains_is_inclusive() {
        let p = BitWidthProfile::INT8;
        assert!(p.contains(-128));
        assert!(p.contains(127));
        assert!(!p.contains(-129));
        assert!(!p.contains(128));
    }
}

// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Uniform integers over an inclusive range of a fixed-width kind
//!
//! # Implementation notes
//!
//! For a closed range, the number of possible values is
//! `range = (max - min + 1)`. We draw `profile.bytes()` random bytes,
//! assemble them little-endian and keep the lowest `ceil(log2(range))` bits.
//! The masked domain holds fewer than `2 * range` values, so rejecting every
//! candidate `>= range` removes the modulo bias while keeping the expected
//! number of draws below two.
//!
//! Ranges needing more than [`MAX_BITS`] bits are refused: 53 bits is the
//! integer precision of an `f64`, which bounds what callers interpolating
//! through floating point can represent exactly.

use super::profile::BitWidthProfile;
use crate::error::{Error, ErrorKind};
use rand::RngCore;

/// Largest number of random bits a single sample may need.
pub const MAX_BITS: u32 = 53;

/// Number of rejected candidates after which sampling gives up.
///
/// With a sound source each attempt succeeds with probability above 1/2, so
/// the limit is only ever reached by a broken (e.g. constant) source.
pub const MAX_REJECTIONS: usize = 64;

/// A value usable as a bound of an integer range.
///
/// Implemented exactly for every primitive integer. Floating-point values are
/// accepted when they are finite and have no fractional part; any other float
/// is reported as "not an integer".
pub trait IntegerBound: Copy {
    /// The value as an integer, or `None` if it has a fractional part.
    fn to_integer(self) -> Option<i128>;
}

macro_rules! integer_bound_impl {
    ($($ty:ty),*) => {
        $(
            impl IntegerBound for $ty {
                #[inline]
                fn to_integer(self) -> Option<i128> {
                    Some(self as i128)
                }
            }
        )*
    };
}

integer_bound_impl! { i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize }

impl IntegerBound for u128 {
    #[inline]
    fn to_integer(self) -> Option<i128> {
        // saturate: anything this large is outside every profile anyway
        Some(i128::try_from(self).unwrap_or(i128::MAX))
    }
}

macro_rules! float_bound_impl {
    ($($ty:ty),*) => {
        $(
            impl IntegerBound for $ty {
                #[inline]
                fn to_integer(self) -> Option<i128> {
                    if self.is_finite() && self.fract() == 0.0 {
                        Some(self as i128)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

float_bound_impl! { f32, f64 }

/// Sample an integer uniformly from `[min_value, max_value]`.
///
/// The bounds must be integers inside `profile`'s domain with
/// `min_value <= max_value`; each violation is reported with its own
/// [`ErrorKind`]. The result always lies inside the profile, so it can be
/// cast to the profile's primitive type without loss.
///
/// # Example
///
/// ```
/// use anyrandom::numbers::{sample_integer, BitWidthProfile};
///
/// let mut rng = rand::rng();
/// let v = sample_integer(&mut rng, -5, 5, BitWidthProfile::INT8).unwrap();
/// assert!((-5..=5).contains(&v));
///
/// // -1 is not a valid unsigned 8-bit bound
/// assert!(sample_integer(&mut rng, -1, 20, BitWidthProfile::UINT8).is_err());
/// ```
pub fn sample_integer<R, B1, B2>(
    rng: &mut R,
    min_value: B1,
    max_value: B2,
    profile: BitWidthProfile,
) -> Result<i64, Error>
where
    R: RngCore + ?Sized,
    B1: IntegerBound,
    B2: IntegerBound,
{
    let (low, high) = validate_range(min_value, max_value, profile)?;
    sample_inclusive(rng, low, high, profile.bytes())
}

fn validate_range<B1, B2>(
    min_value: B1,
    max_value: B2,
    profile: BitWidthProfile,
) -> Result<(i128, i128), Error>
where
    B1: IntegerBound,
    B2: IntegerBound,
{
    let low = min_value.to_integer().ok_or(Error::new(
        ErrorKind::InvalidArgument,
        "min_value must be an integer",
    ))?;
    let high = max_value.to_integer().ok_or(Error::new(
        ErrorKind::InvalidArgument,
        "max_value must be an integer",
    ))?;

    if !profile.contains(low) {
        return Err(Error::new(
            ErrorKind::OutOfRange,
            "min_value must be within the domain of the bit-width profile",
        ));
    }
    if !profile.contains(high) {
        return Err(Error::new(
            ErrorKind::OutOfRange,
            "max_value must be within the domain of the bit-width profile",
        ));
    }
    if !(low <= high) {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "min_value must be <= max_value",
        ));
    }
    Ok((low, high))
}

/// Number of bits needed to index `range` values, i.e. `ceil(log2(range))`.
#[inline]
fn bits_needed(range: u128) -> u32 {
    debug_assert!(range > 0);
    128 - (range - 1).leading_zeros()
}

fn sample_inclusive<R: RngCore + ?Sized>(
    rng: &mut R,
    low: i128,
    high: i128,
    width: usize,
) -> Result<i64, Error> {
    let range = (high - low + 1) as u128;
    let bits = bits_needed(range);
    if bits > MAX_BITS {
        return Err(Error::new(
            ErrorKind::RangeTooLarge,
            "range needs more than 53 bits of entropy",
        ));
    }
    let mask = (1u64 << bits) - 1;

    for _ in 0..MAX_REJECTIONS {
        let mut buf = [0u8; 8];
        rng.fill_bytes(&mut buf[..width]);
        let candidate = u64::from_le_bytes(buf) & mask;
        if (candidate as u128) < range {
            return Ok((low + candidate as i128) as i64);
        }
        trace!("rejected candidate {} for a range of {} values", candidate, range);
    }

    warn!(
        "no in-range candidate for [{}, {}] after {} attempts",
        low, high, MAX_REJECTIONS
    );
    Err(Error::new(
        ErrorKind::RangeTooLarge,
        "random source never produced an in-range value",
    ))
}

macro_rules! width_sampler {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $profile:ident) => {
        $(#[$meta])*
        ///
        /// See [`sample_integer`] for the validation rules.
        #[inline]
        pub fn $name<R, B1, B2>(rng: &mut R, min_value: B1, max_value: B2) -> Result<$ty, Error>
        where
            R: RngCore + ?Sized,
            B1: IntegerBound,
            B2: IntegerBound,
        {
            sample_integer(rng, min_value, max_value, BitWidthProfile::$profile).map(|v| v as $ty)
        }
    };
}

width_sampler! {
    /// Sample a signed 8-bit integer from `[min_value, max_value]`.
    int8, i8, INT8
}
width_sampler! {
    /// Sample an unsigned 8-bit integer from `[min_value, max_value]`.
    uint8, u8, UINT8
}
width_sampler! {
    /// Sample a signed 16-bit integer from `[min_value, max_value]`.
    int16, i16, INT16
}
width_sampler! {
    /// Sample an unsigned 16-bit integer from `[min_value, max_value]`.
    uint16, u16, UINT16
}
width_sampler! {
    /// Sample a signed 32-bit integer from `[min_value, max_value]`.
    int32, i32, INT32
}
width_sampler! {
    /// Sample an unsigned 32-bit integer from `[min_value, max_value]`.
    uint32, u32, UINT32
}
width_sampler! {
    /// Sample a signed 64-bit integer from `[min_value, max_value]`.
    ///
    /// The bounds may be any `i64`, but `max_value - min_value` must fit in
    /// [`MAX_BITS`] bits.
    int64, i64, INT64
}

// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The bounded-range numeric engine.
//!
//! Two samplers do all the numeric work of this crate:
//!
//! - [`sample_integer`] draws integers uniformly from an inclusive range of
//!   a [`BitWidthProfile`], by rejection sampling over masked random bytes.
//!   The width wrappers [`int8`], [`uint8`], [`int16`], [`uint16`],
//!   [`int32`], [`uint32`] and [`int64`] bake the profile in.
//! - [`sample_scaled_float`] draws floating-point numbers from a range that
//!   may be enormous or unbounded, under a [`Scale`]. [`double`] and
//!   [`single`] are its two precisions.
//!
//! [`sign`] and [`relatively_equal`] are small helpers shared by both and
//! exposed for callers.

mod comparator;
mod integer;
mod profile;
mod scaled;
mod sign;

pub use self::comparator::{epsilon, relatively_equal, sign_of};
pub use self::integer::{
    int16, int32, int64, int8, sample_integer, uint16, uint32, uint8, IntegerBound, MAX_BITS,
    MAX_REJECTIONS,
};
pub use self::profile::BitWidthProfile;
pub use self::scaled::{
    double, narrow, sample_scaled_float, single, Precision, MAX_EXPONENT, MIN_EXPONENT,
};
pub use self::sign::sign;

use crate::seq::Variants;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sampling distribution for floating-point ranges.
///
/// Types like `f64` hold values up to about `10^308`; a number picked
/// linearly from such a range is almost never of a magnitude humans are
/// familiar with. The scale chooses between linear and magnitude-biased
/// sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scale {
    /// The trivial non-scale; samples like [`Scale::Flat`].
    Unscaled,
    /// Linear interpolation between the bounds: most values of a wide range
    /// have a large magnitude.
    Flat,
    /// Uniform in the decimal exponent: values span the whole range but
    /// cluster exponentially around zero.
    #[default]
    Exponential,
}

impl Variants for Scale {
    const VARIANTS: &'static [Self] = &[Scale::Unscaled, Scale::Flat, Scale::Exponential];
}

impl Variants for Precision {
    const VARIANTS: &'static [Self] = &[Precision::Double, Precision::Single];
}

// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random signs

use super::integer::int8;
use crate::error::Error;
use rand::Rng;

/// Sample a sign: `-1` or `1`, or with `include_zero` one of `-1`, `0`, `1`.
///
/// Without zero this is a fair coin. With zero the value is the sign of a
/// uniform signed 8-bit integer from `[-1, 1]`, so each outcome has
/// probability 1/3.
pub fn sign<R: Rng + ?Sized>(rng: &mut R, include_zero: bool) -> Result<i8, Error> {
    if !include_zero {
        return Ok(if rng.random::<bool>() { 1 } else { -1 });
    }
    int8(rng, -1, 1).map(i8::signum)
}

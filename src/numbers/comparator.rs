// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Magnitude-aware comparison of floating-point numbers

/// The mathematical sign of `value`: `-1`, `0` or `1`.
///
/// Unlike [`f64::signum`], both zeros map to `0`. NaN also maps to `0`.
#[inline]
pub fn sign_of(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Whether `a` and `b` are close enough to be treated as equal.
///
/// Numbers on opposite sides of zero are never equal, however small. Otherwise
/// the distance between them is compared against [`epsilon`].
///
/// ```
/// use anyrandom::numbers::relatively_equal;
///
/// assert!(relatively_equal(1e300, 1e300 + 1e280));
/// assert!(!relatively_equal(-1e-300, 1e-300));
/// ```
pub fn relatively_equal(a: f64, b: f64) -> bool {
    if sign_of(a) != sign_of(b) {
        return false;
    }
    (a - b).abs() < epsilon(a, b)
}

/// The tolerance used by [`relatively_equal`]: machine epsilon when both
/// magnitudes are below one, otherwise machine epsilon scaled by the larger
/// magnitude.
pub fn epsilon(a: f64, b: f64) -> f64 {
    let close_to_zero = a.abs() < 1.0 && b.abs() < 1.0;
    if close_to_zero {
        f64::EPSILON
    } else {
        f64::EPSILON * a.abs().max(b.abs())
    }
}

// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Floating-point numbers over ranges of arbitrary magnitude
//!
//! # Implementation notes
//!
//! The [`Flat`] scale interpolates linearly between the bounds, so over a
//! range like `[1, 1e300]` practically every sample is above `1e290`.
//!
//! The [`Exponential`] scale instead draws a decimal exponent uniformly
//! between `log10(min)` and `log10(max)` and returns `sign * 10^exponent`.
//! Bounds whose logarithm is undefined (zero, negative or infinite) use
//! [`MIN_EXPONENT`] and [`MAX_EXPONENT`] instead. A result that escapes the
//! range (which is frequent for negative bounds and rare elsewhere) is
//! replaced by a flat sample.
//!
//! Flat interpolation can round one ulp past a bound on narrow ranges of
//! large magnitude, e.g. `[1e15, 1e15 + 1]`, so its result is clamped into
//! the (finite) bounds. Together with the fallback this keeps every sample
//! in range.
//!
//! [`Flat`]: Scale::Flat
//! [`Exponential`]: Scale::Exponential

use super::comparator::{relatively_equal, sign_of};
use super::sign::sign;
use super::Scale;
use crate::error::{Error, ErrorKind};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal exponent used in place of an undefined `log10(min_value)`.
pub const MIN_EXPONENT: f64 = -100.0;

/// Decimal exponent used in place of an undefined `log10(max_value)`.
pub const MAX_EXPONENT: f64 = 308.0;

/// Floating-point precision of a sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precision {
    /// IEEE-754 binary64.
    #[default]
    Double,
    /// IEEE-754 binary32, narrowed from a double sample.
    Single,
}

/// Sample a floating-point number from `[min_value, max_value]`.
///
/// Either bound may be infinite. With [`Precision::Single`] the double
/// sample is [narrowed](narrow) and returned widened back to `f64`.
///
/// Returns an error if `min_value > max_value` or either bound is NaN.
pub fn sample_scaled_float<R: Rng + ?Sized>(
    rng: &mut R,
    min_value: f64,
    max_value: f64,
    scale: Scale,
    precision: Precision,
) -> Result<f64, Error> {
    let value = double(rng, min_value, max_value, scale)?;
    Ok(match precision {
        Precision::Double => value,
        Precision::Single => narrow(value) as f64,
    })
}

/// Sample an `f64` from `[min_value, max_value]` under `scale`.
///
/// # Example
///
/// ```
/// use anyrandom::numbers::{double, Scale};
///
/// let mut rng = rand::rng();
/// let x = double(&mut rng, -10.0, -1.0, Scale::Exponential).unwrap();
/// assert!(x >= -10.0 && x <= -1.0);
///
/// let y = double(&mut rng, 0.0, f64::INFINITY, Scale::default()).unwrap();
/// assert!(y >= 0.0 && y.is_finite());
/// ```
pub fn double<R: Rng + ?Sized>(
    rng: &mut R,
    min_value: f64,
    max_value: f64,
    scale: Scale,
) -> Result<f64, Error> {
    if min_value.is_nan() || max_value.is_nan() {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "bounds must not be NaN",
        ));
    }
    if !(min_value <= max_value) {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "min_value must be <= max_value",
        ));
    }

    match scale {
        Scale::Exponential => exponential(rng, min_value, max_value),
        Scale::Flat | Scale::Unscaled => Ok(flat(rng, min_value, max_value)),
    }
}

/// Sample an `f32` from `[min_value, max_value]` under `scale`.
///
/// The bounds are widened exactly, a double is sampled, and the result is
/// [narrowed](narrow) to single precision.
pub fn single<R: Rng + ?Sized>(
    rng: &mut R,
    min_value: f32,
    max_value: f32,
    scale: Scale,
) -> Result<f32, Error> {
    double(rng, min_value as f64, max_value as f64, scale).map(narrow)
}

/// Round a double to the nearest single-precision value.
///
/// This is IEEE-754 round-to-nearest, ties-to-even at the 24-bit significand:
/// values beyond the largest finite `f32` (after rounding) become infinite
/// and tiny values narrow to subnormals or zero.
#[inline]
pub fn narrow(value: f64) -> f32 {
    value as f32
}

#[inline]
fn clamp_infinite(value: f64) -> f64 {
    if value == f64::INFINITY {
        f64::MAX
    } else if value == f64::NEG_INFINITY {
        f64::MIN
    } else {
        value
    }
}

/// Linear interpolation between the bounds.
fn flat<R: Rng + ?Sized>(rng: &mut R, min_value: f64, max_value: f64) -> f64 {
    let min_value = clamp_infinite(min_value);
    let max_value = clamp_infinite(max_value);

    let scalar: f64 = rng.random();
    let p1 = scalar * max_value;
    let p2 = scalar * min_value;
    // not simplified: `min + s*max - s*min` does not overflow where
    // `min + s*(max - min)` would
    let value = clamp_infinite(min_value + p1 - p2);
    // `max`/`min` rather than `clamp`: exponent bounds may arrive inverted
    value.max(min_value).min(max_value)
}

fn exponential<R: Rng + ?Sized>(
    rng: &mut R,
    min_value: f64,
    max_value: f64,
) -> Result<f64, Error> {
    if !valid_bounds(min_value, max_value) {
        return Ok(f64::from_bits(1));
    }
    if relatively_equal(min_value, max_value) {
        return Ok(min_value);
    }

    let mut min_scale = min_value.log10();
    if !min_scale.is_finite() {
        min_scale = MIN_EXPONENT;
    }
    let mut max_scale = max_value.log10();
    if !max_scale.is_finite() {
        max_scale = MAX_EXPONENT;
    }

    let sign = range_sign(rng, min_value, max_value)?;
    let exponent = flat(rng, min_scale, max_scale);
    let output = sign * 10f64.powf(exponent);
    if contains(min_value, max_value, output) {
        return Ok(output);
    }

    debug!(
        "exponential sample {} escaped [{}, {}], using the flat scale",
        output, min_value, max_value
    );
    Ok(flat(rng, min_value, max_value))
}

/// Both bounds infinite on the same side leaves nothing to sample.
fn valid_bounds(min_value: f64, max_value: f64) -> bool {
    let same_infinity = min_value.is_infinite()
        && max_value.is_infinite()
        && sign_of(min_value) == sign_of(max_value);
    !same_infinity
}

/// Inclusive containment; an infinite bound accepts everything on its side.
fn contains(min_value: f64, max_value: f64, value: f64) -> bool {
    let above_min = min_value == f64::NEG_INFINITY || value >= min_value;
    let below_max = max_value == f64::INFINITY || value <= max_value;
    above_min && below_max
}

/// Sign of a sample from `[min_value, max_value]`.
///
/// Bounds of one sign give that sign, a zero bound defers to the other bound,
/// and bounds of opposite signs give a random sign.
fn range_sign<R: Rng + ?Sized>(rng: &mut R, min_value: f64, max_value: f64) -> Result<f64, Error> {
    let sign_max = sign_of(max_value);
    let sign_min = sign_of(min_value);

    match sign_max - sign_min {
        0 => Ok(sign_min as f64),
        1 => Ok((sign_max + sign_min) as f64),
        2 => sign(rng, false).map(|s| s as f64),
        // `double` rejects inverted bounds before sampling
        _ => unreachable!("range_sign called with max_value < min_value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rngs::mock::ScriptedRng;

    const SCALES: [Scale; 3] = [Scale::Unscaled, Scale::Flat, Scale::Exponential];

    #[test]
    fn test_floats_in_range() {
        let mut rng = crate::test::rng(252);
        let v: &[(f64, f64)] = &[
            (0.0, 100.0),
            (-100.0, 100.0),
            (-1e35, -1e25),
            (1e-35, 1e-25),
            (-1e35, 1e35),
            (0.0, 1e-300),
            (-5.0, 0.0),
            (f64::from_bits(0), f64::from_bits(3)),
            (f64::MIN, f64::MAX),
        ];
        for &(low, high) in v {
            for &scale in &SCALES {
                for _ in 0..500 {
                    let x = double(&mut rng, low, high, scale).unwrap();
                    assert!(low <= x && x <= high, "{} not in [{}, {}] ({:?})", x, low, high, scale);
                }
            }
        }
    }

    #[test]
    fn test_narrow_ranges_at_large_magnitude() {
        // interpolation rounds past the upper bound here without clamping
        let mut rng = crate::test::rng(9);
        let v: &[(f64, f64)] = &[
            (1e15, 1e15 + 1.0),
            (1e6, 1e6 + 1e-9),
            (-1e15 - 1.0, -1e15),
            (4503599627370496.0, 4503599627370497.0),
        ];
        for &(low, high) in v {
            for &scale in &SCALES {
                for _ in 0..20_000 {
                    let x = double(&mut rng, low, high, scale).unwrap();
                    assert!(low <= x && x <= high, "{} not in [{}, {}] ({:?})", x, low, high, scale);
                }
            }
        }
    }

    #[test]
    fn test_flat_is_clamped_to_bounds() {
        // the largest unit draw, 1 - 2^-53
        let mut rng = ScriptedRng::new(&[u64::MAX]);
        let x = double(&mut rng, 1e15, 1e15 + 1.0, Scale::Flat).unwrap();
        assert!(x <= 1e15 + 1.0);
    }

    #[test]
    fn test_min_exponent_above_max_exponent() {
        // log10(1.5e308) exceeds the 308 used for an infinite upper bound
        let mut rng = crate::test::rng(259);
        for _ in 0..500 {
            let x = double(&mut rng, 1.5e308, f64::INFINITY, Scale::Exponential).unwrap();
            assert!(x >= 1.5e308 && x.is_finite());
        }
    }

    #[test]
    fn test_infinite_bounds() {
        let mut rng = crate::test::rng(253);
        for &scale in &SCALES {
            for _ in 0..500 {
                let x = double(&mut rng, f64::NEG_INFINITY, f64::INFINITY, scale).unwrap();
                assert!(x.is_finite());

                let x = double(&mut rng, 5.0, f64::INFINITY, scale).unwrap();
                assert!(x >= 5.0 && x.is_finite());

                let x = double(&mut rng, f64::NEG_INFINITY, -5.0, scale).unwrap();
                assert!(x <= -5.0 && x.is_finite());
            }
        }
    }

    #[test]
    fn test_same_infinity_yields_smallest_value() {
        let mut rng = crate::test::rng(254);
        let tiny = f64::from_bits(1);
        assert_eq!(
            double(&mut rng, f64::INFINITY, f64::INFINITY, Scale::Exponential),
            Ok(tiny)
        );
        assert_eq!(
            double(&mut rng, f64::NEG_INFINITY, f64::NEG_INFINITY, Scale::Exponential),
            Ok(tiny)
        );
        // the flat scale clamps to the largest finite magnitude instead
        assert_eq!(
            double(&mut rng, f64::INFINITY, f64::INFINITY, Scale::Flat),
            Ok(f64::MAX)
        );
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = crate::test::rng(255);
        for &x in &[0.0, -0.0, 1.5, -1e300, 1e-300, f64::MAX] {
            assert_eq!(double(&mut rng, x, x, Scale::Exponential), Ok(x));
            for &scale in &[Scale::Flat, Scale::Unscaled] {
                let y = double(&mut rng, x, x, scale).unwrap();
                assert!(relatively_equal(x, y) || x == y, "{} vs {}", x, y);
            }
        }
    }

    #[test]
    fn test_relatively_equal_bounds_short_circuit() {
        // no random draws at all
        let mut rng = ScriptedRng::new(&[u64::MAX]);
        let low = 1e10;
        let high = 1e10 + 1e-7;
        assert_eq!(double(&mut rng, low, high, Scale::Exponential), Ok(low));
        assert_eq!(rng.words_drawn(), 0);
    }

    #[test]
    fn test_invalid_ranges() {
        let mut rng = crate::test::rng(256);
        for &scale in &SCALES {
            let err = double(&mut rng, 2.0, 1.0, scale).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(double(&mut rng, f64::NAN, 1.0, scale).is_err());
            assert!(double(&mut rng, 1.0, f64::NAN, scale).is_err());
            assert!(double(&mut rng, f64::INFINITY, f64::NEG_INFINITY, scale).is_err());
        }
    }

    #[test]
    fn test_sign_follows_bounds() {
        let mut rng = crate::test::rng(257);
        let (mut negative, mut positive) = (0, 0);
        for _ in 0..1000 {
            assert!(double(&mut rng, -10.0, -1.0, Scale::Exponential).unwrap() < 0.0);
            assert!(double(&mut rng, 1.0, 10.0, Scale::Exponential).unwrap() > 0.0);
            let x = double(&mut rng, -1.0, 1.0, Scale::Exponential).unwrap();
            if x < 0.0 {
                negative += 1;
            } else if x > 0.0 {
                positive += 1;
            }
        }
        assert!(negative > 100 && positive > 100, "{} / {}", negative, positive);
    }

    #[test]
    fn test_range_sign() {
        let mut rng = ScriptedRng::new(&[0]);
        assert_eq!(range_sign(&mut rng, -3.0, -2.0), Ok(-1.0));
        assert_eq!(range_sign(&mut rng, 2.0, 3.0), Ok(1.0));
        assert_eq!(range_sign(&mut rng, 0.0, 3.0), Ok(1.0));
        assert_eq!(range_sign(&mut rng, -3.0, 0.0), Ok(-1.0));
        assert_eq!(range_sign(&mut rng, 0.0, 0.0), Ok(0.0));
        assert_eq!(rng.words_drawn(), 0);
    }

    #[test]
    #[should_panic(expected = "max_value < min_value")]
    fn test_range_sign_inverted_bounds() {
        let mut rng = ScriptedRng::new(&[0]);
        let _ = range_sign(&mut rng, 3.0, -3.0);
    }

    #[test]
    fn test_exponential_hits_lower_bound() {
        // scalar 0 selects the exponent log10(min) = 0
        let mut rng = ScriptedRng::new(&[0]);
        assert_eq!(double(&mut rng, 1.0, 10.0, Scale::Exponential), Ok(1.0));
        assert_eq!(rng.words_drawn(), 1);
    }

    #[test]
    fn test_exponential_falls_back_to_flat() {
        // log10 of negative bounds is NaN, so the exponent is drawn from
        // [-100, 308]; scalar 0 gives -1e-100, outside [-10, -1], and the
        // flat fallback then returns min_value
        let mut rng = ScriptedRng::new(&[0]);
        assert_eq!(double(&mut rng, -10.0, -1.0, Scale::Exponential), Ok(-10.0));
        assert_eq!(rng.words_drawn(), 2);
    }

    #[test]
    fn test_exponential_fallback_with_extreme_bounds() {
        let mut rng = crate::test::rng(258);
        let v: &[(f64, f64)] = &[
            (1.0, f64::MAX),
            (-f64::MAX, -1.0),
            (-f64::MAX, f64::MAX),
            (f64::MIN_POSITIVE, f64::MAX),
            (-1e-300, 1e-300),
            (1e307, f64::INFINITY),
            (f64::NEG_INFINITY, 1e-320),
        ];
        for &(low, high) in v {
            for _ in 0..2000 {
                let x = double(&mut rng, low, high, Scale::Exponential).unwrap();
                assert!(x.is_finite());
                assert!(low <= x && x <= high, "{} not in [{}, {}]", x, low, high);
            }
        }
    }

    #[test]
    fn test_flat_does_not_overflow() {
        let mut rng = ScriptedRng::new(&[u64::MAX]);
        let x = double(&mut rng, f64::MIN, f64::MAX, Scale::Flat).unwrap();
        assert!(x.is_finite());
        assert!(x > 0.0);
    }

    #[test]
    fn test_single() {
        let mut rng = crate::test::rng(259);
        for &scale in &SCALES {
            for _ in 0..500 {
                let x = single(&mut rng, -100.0, 100.0, scale).unwrap();
                assert!((-100.0..=100.0).contains(&x));
                let y = single(&mut rng, f32::NEG_INFINITY, f32::INFINITY, scale).unwrap();
                assert!(!y.is_nan());
            }
        }
        assert!(single(&mut rng, 1.0, -1.0, Scale::Flat).is_err());
    }

    #[test]
    fn test_sample_scaled_float_precision() {
        let mut rng = crate::test::rng(260);
        for _ in 0..500 {
            let x = sample_scaled_float(&mut rng, 0.0, 1.0, Scale::Flat, Precision::Single).unwrap();
            assert_eq!(x, x as f32 as f64);
        }
    }

    #[test]
    fn test_narrow_exact_values() {
        assert_eq!(narrow((1u64 << 30) as f64), 1073741824.0);
        assert_eq!(narrow(2f64.powi(127)), 2f32.powi(127));
        assert_eq!(narrow(2f64.powi(128)), f32::INFINITY);
        assert_eq!(narrow(-2f64.powi(128)), f32::NEG_INFINITY);
        assert_eq!(narrow(f32::MAX as f64), f32::MAX);
    }

    #[test]
    fn test_narrow_overflow_boundary() {
        // halfway between f32::MAX and 2^128 rounds to even, i.e. up
        let halfway = 2f64.powi(128) - 2f64.powi(103);
        assert_eq!(narrow(halfway), f32::INFINITY);
        let below = halfway - 2f64.powi(80);
        assert_eq!(narrow(below), f32::MAX);
    }

    #[test]
    fn test_narrow_subnormals() {
        let smallest = f32::from_bits(1);
        assert_eq!(narrow(2f64.powi(-149)), smallest);
        assert_eq!(narrow(2f64.powi(-126)), f32::MIN_POSITIVE);
        // exact halfway to zero rounds to even (zero)
        assert_eq!(narrow(2f64.powi(-150)), 0.0);
        assert_eq!(narrow(1.5 * 2f64.powi(-150)), smallest);
        assert_eq!(narrow(3.0 * 2f64.powi(-150)), f32::from_bits(2));
    }

    #[test]
    fn test_narrow_ties_to_even() {
        let ulp = 2f64.powi(-23);
        // 1 + ulp/2 is halfway between 1 (even) and 1 + ulp (odd)
        assert_eq!(narrow(1.0 + ulp / 2.0), 1.0);
        // 1 + 3ulp/2 is halfway between 1 + ulp (odd) and 1 + 2ulp (even)
        assert_eq!(narrow(1.0 + 1.5 * ulp), 1.0 + 2.0 * 2f32.powi(-23));
        // just above halfway rounds up
        assert_eq!(narrow(1.0 + ulp / 2.0 + 2f64.powi(-40)), 1.0 + 2f32.powi(-23));
    }
}

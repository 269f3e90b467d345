// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sequence-related functionality
//!
//! This module provides:
//!
//! *   [`one_of`] for picking one element of a slice
//! *   [`array_of`] and [`try_array_of`] for filling a `Vec` from a generator
//!     function, with a length described by [`Count`]
//! *   [`Variants`] and [`variant`] for picking a variant of a field-less enum
//!
//! All indices and counts are sampled as `u32` through
//! [`uint32`](crate::numbers::uint32), so results are reproducible across
//! 32-64 bit architectures.

use crate::error::{Error, ErrorKind};
use crate::numbers::uint32;
use rand::Rng;

/// Element count used by [`Count::Default`]: uniform in `[5, 10]`.
pub const DEFAULT_ARRAY_COUNT: (u32, u32) = (5, 10);

/// A field-less enum whose variants can be listed.
///
/// # Example
///
/// ```
/// use anyrandom::seq::{variant, Variants};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Suit { Clubs, Diamonds, Hearts, Spades }
///
/// impl Variants for Suit {
///     const VARIANTS: &'static [Self] =
///         &[Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
/// }
///
/// let suit: Suit = variant(&mut rand::rng()).unwrap();
/// assert!(Suit::VARIANTS.contains(&suit));
/// ```
pub trait Variants: Sized + 'static {
    /// Every variant of the type, each listed once.
    const VARIANTS: &'static [Self];
}

/// Number of elements to generate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Count {
    /// A random count from [`DEFAULT_ARRAY_COUNT`].
    #[default]
    Default,
    /// Exactly this many elements.
    Exactly(usize),
    /// A random count from `[min, max]`.
    Between(usize, usize),
}

impl Count {
    /// Resolve to a concrete element count.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Result<usize, Error> {
        match self {
            Count::Default => {
                let (low, high) = DEFAULT_ARRAY_COUNT;
                uint32(rng, low, high).map(|n| n as usize)
            }
            Count::Exactly(n) => Ok(n),
            Count::Between(min, max) => uint32(rng, min, max).map(|n| n as usize),
        }
    }
}

/// Uniformly sample one element of `items`.
///
/// Returns an error if `items` is empty or has more than `u32::MAX + 1`
/// elements.
///
/// # Example
///
/// ```
/// use anyrandom::seq::one_of;
///
/// let choices = [1, 2, 4, 8, 16, 32];
/// let mut rng = rand::rng();
/// println!("{}", one_of(&mut rng, &choices).unwrap());
/// assert!(one_of(&mut rng, &[0u8; 0]).is_err());
/// ```
pub fn one_of<'a, R, T>(rng: &mut R, items: &'a [T]) -> Result<&'a T, Error>
where
    R: Rng + ?Sized,
{
    let last = items.len().checked_sub(1).ok_or(Error::new(
        ErrorKind::InvalidArgument,
        "items must not be empty",
    ))?;
    let index = uint32(rng, 0, last)?;
    Ok(&items[index as usize])
}

/// Collect `count` values of `generator` into a `Vec`.
///
/// # Example
///
/// ```
/// use anyrandom::numbers::uint8;
/// use anyrandom::seq::{array_of, Count};
///
/// let mut rng = rand::rng();
/// let v = array_of(&mut rng, Count::Between(1, 3), |rng| uint8(rng, 0, 9)).unwrap();
/// assert!((1..=3).contains(&v.len()));
/// ```
pub fn array_of<R, T, F>(rng: &mut R, count: Count, mut generator: F) -> Result<Vec<T>, Error>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> T,
{
    let n = count.sample(rng)?;
    Ok((0..n).map(|_| generator(rng)).collect())
}

/// Like [`array_of`], for generators that can fail.
///
/// Stops at the first error and returns it.
pub fn try_array_of<R, T, F>(rng: &mut R, count: Count, mut generator: F) -> Result<Vec<T>, Error>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Result<T, Error>,
{
    let n = count.sample(rng)?;
    (0..n).map(|_| generator(rng)).collect()
}

/// Uniformly sample one of `T`'s variants.
pub fn variant<T, R>(rng: &mut R) -> Result<T, Error>
where
    T: Variants + Copy,
    R: Rng + ?Sized,
{
    one_of(rng, T::VARIANTS).copied()
}

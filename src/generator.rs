// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The pluggable generator behind [`AnyRandom`](crate::AnyRandom).
//!
//! [`RandomObjectGenerator`] is the seam between the convenience facade and
//! the value generators. It is object safe, so a facade can also hold a
//! `Box<dyn RandomObjectGenerator>`. [`StdGenerator`] implements it with the
//! samplers of this crate over any [`Rng`].

use crate::dates;
use crate::error::Error;
use crate::numbers::{self, Scale};
use crate::strings;
use crate::urls::{self, UrlOptions};
use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

/// A source of random test values.
///
/// Every method takes explicit bounds; defaults are the facade's business.
/// Bounds follow the rules of the corresponding free functions, e.g.
/// [`numbers::double`] for [`double`](RandomObjectGenerator::double).
pub trait RandomObjectGenerator {
    /// A fair coin.
    fn boolean(&mut self) -> bool;

    /// `-1` or `1`, or with `include_zero` one of `-1`, `0`, `1`.
    fn sign(&mut self, include_zero: bool) -> Result<i8, Error>;

    /// A signed 8-bit integer from `[min_value, max_value]`.
    fn int8(&mut self, min_value: i8, max_value: i8) -> Result<i8, Error>;

    /// An unsigned 8-bit integer from `[min_value, max_value]`.
    fn uint8(&mut self, min_value: u8, max_value: u8) -> Result<u8, Error>;

    /// A signed 16-bit integer from `[min_value, max_value]`.
    fn int16(&mut self, min_value: i16, max_value: i16) -> Result<i16, Error>;

    /// An unsigned 16-bit integer from `[min_value, max_value]`.
    fn uint16(&mut self, min_value: u16, max_value: u16) -> Result<u16, Error>;

    /// A signed 32-bit integer from `[min_value, max_value]`.
    fn int32(&mut self, min_value: i32, max_value: i32) -> Result<i32, Error>;

    /// An unsigned 32-bit integer from `[min_value, max_value]`.
    fn uint32(&mut self, min_value: u32, max_value: u32) -> Result<u32, Error>;

    /// A signed 64-bit integer from `[min_value, max_value]`; the range may
    /// need at most 53 bits.
    fn int64(&mut self, min_value: i64, max_value: i64) -> Result<i64, Error>;

    /// A double from `[min_value, max_value]` under `scale`.
    fn double(&mut self, min_value: f64, max_value: f64, scale: Scale) -> Result<f64, Error>;

    /// A single from `[min_value, max_value]` under `scale`.
    fn single(&mut self, min_value: f32, max_value: f32, scale: Scale) -> Result<f32, Error>;

    /// One character of `character_set`.
    fn char(&mut self, character_set: &str) -> Result<char, Error>;

    /// Between `min_length` and `max_length` characters of `character_set`.
    fn char_array(
        &mut self,
        min_length: usize,
        max_length: usize,
        character_set: &str,
    ) -> Result<Vec<char>, Error>;

    /// A string of between `min_length` and `max_length` characters of
    /// `character_set`.
    fn string(
        &mut self,
        min_length: usize,
        max_length: usize,
        character_set: &str,
    ) -> Result<String, Error>;

    /// An instant from `[earliest, latest]`.
    fn date(
        &mut self,
        earliest: DateTime<Utc>,
        latest: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, Error>;

    /// A version 4 UUID.
    fn uuid(&mut self) -> Uuid;

    /// A URL with the parts selected by `options`.
    fn url(&mut self, options: UrlOptions) -> Result<String, Error>;
}

impl<G: RandomObjectGenerator + ?Sized> RandomObjectGenerator for Box<G> {
    fn boolean(&mut self) -> bool {
        (**self).boolean()
    }
    fn sign(&mut self, include_zero: bool) -> Result<i8, Error> {
        (**self).sign(include_zero)
    }
    fn int8(&mut self, min_value: i8, max_value: i8) -> Result<i8, Error> {
        (**self).int8(min_value, max_value)
    }
    fn uint8(&mut self, min_value: u8, max_value: u8) -> Result<u8, Error> {
        (**self).uint8(min_value, max_value)
    }
    fn int16(&mut self, min_value: i16, max_value: i16) -> Result<i16, Error> {
        (**self).int16(min_value, max_value)
    }
    fn uint16(&mut self, min_value: u16, max_value: u16) -> Result<u16, Error> {
        (**self).uint16(min_value, max_value)
    }
    fn int32(&mut self, min_value: i32, max_value: i32) -> Result<i32, Error> {
        (**self).int32(min_value, max_value)
    }
    fn uint32(&mut self, min_value: u32, max_value: u32) -> Result<u32, Error> {
        (**self).uint32(min_value, max_value)
    }
    fn int64(&mut self, min_value: i64, max_value: i64) -> Result<i64, Error> {
        (**self).int64(min_value, max_value)
    }
    fn double(&mut self, min_value: f64, max_value: f64, scale: Scale) -> Result<f64, Error> {
        (**self).double(min_value, max_value, scale)
    }
    fn single(&mut self, min_value: f32, max_value: f32, scale: Scale) -> Result<f32, Error> {
        (**self).single(min_value, max_value, scale)
    }
    fn char(&mut self, character_set: &str) -> Result<char, Error> {
        (**self).char(character_set)
    }
    fn char_array(
        &mut self,
        min_length: usize,
        max_length: usize,
        character_set: &str,
    ) -> Result<Vec<char>, Error> {
        (**self).char_array(min_length, max_length, character_set)
    }
    fn string(
        &mut self,
        min_length: usize,
        max_length: usize,
        character_set: &str,
    ) -> Result<String, Error> {
        (**self).string(min_length, max_length, character_set)
    }
    fn date(
        &mut self,
        earliest: DateTime<Utc>,
        latest: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, Error> {
        (**self).date(earliest, latest)
    }
    fn uuid(&mut self) -> Uuid {
        (**self).uuid()
    }
    fn url(&mut self, options: UrlOptions) -> Result<String, Error> {
        (**self).url(options)
    }
}

/// The standard generator: this crate's samplers driven by an [`Rng`].
///
/// # Example
///
/// ```
/// use anyrandom::generator::{RandomObjectGenerator, StdGenerator};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut g = StdGenerator::new(StdRng::seed_from_u64(7));
/// let b = g.uint8(10, 20).unwrap();
/// assert!((10..=20).contains(&b));
/// ```
#[derive(Clone, Debug)]
pub struct StdGenerator<R> {
    rng: R,
}

impl<R: Rng> StdGenerator<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        StdGenerator { rng }
    }

    /// The underlying random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consume the generator, returning its random source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

macro_rules! forward_integer {
    ($($name:ident: $ty:ty),*) => {
        $(
            #[inline]
            fn $name(&mut self, min_value: $ty, max_value: $ty) -> Result<$ty, Error> {
                numbers::$name(&mut self.rng, min_value, max_value)
            }
        )*
    };
}

impl<R: Rng> RandomObjectGenerator for StdGenerator<R> {
    #[inline]
    fn boolean(&mut self) -> bool {
        self.rng.random()
    }

    fn sign(&mut self, include_zero: bool) -> Result<i8, Error> {
        numbers::sign(&mut self.rng, include_zero)
    }

    forward_integer! {
        int8: i8, uint8: u8, int16: i16, uint16: u16, int32: i32, uint32: u32, int64: i64
    }

    fn double(&mut self, min_value: f64, max_value: f64, scale: Scale) -> Result<f64, Error> {
        numbers::double(&mut self.rng, min_value, max_value, scale)
    }

    fn single(&mut self, min_value: f32, max_value: f32, scale: Scale) -> Result<f32, Error> {
        numbers::single(&mut self.rng, min_value, max_value, scale)
    }

    fn char(&mut self, character_set: &str) -> Result<char, Error> {
        strings::char(&mut self.rng, character_set)
    }

    fn char_array(
        &mut self,
        min_length: usize,
        max_length: usize,
        character_set: &str,
    ) -> Result<Vec<char>, Error> {
        strings::char_array(&mut self.rng, min_length, max_length, character_set)
    }

    fn string(
        &mut self,
        min_length: usize,
        max_length: usize,
        character_set: &str,
    ) -> Result<String, Error> {
        strings::string(&mut self.rng, min_length, max_length, character_set)
    }

    fn date(
        &mut self,
        earliest: DateTime<Utc>,
        latest: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, Error> {
        dates::date(&mut self.rng, earliest, latest)
    }

    fn uuid(&mut self) -> Uuid {
        strings::uuid(&mut self.rng)
    }

    fn url(&mut self, options: UrlOptions) -> Result<String, Error> {
        urls::url(&mut self.rng, options)
    }
}

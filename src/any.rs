// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The [`AnyRandom`] facade

use crate::error::{Error, ErrorKind};
use crate::generator::{RandomObjectGenerator, StdGenerator};
use crate::numbers::Scale;
use crate::seq::{Count, Variants, DEFAULT_ARRAY_COUNT};
use crate::strings::{DEFAULT_CHARACTER_SET, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use crate::urls::UrlOptions;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Generates pseudo-random values for tests.
///
/// The facade fills in the default arguments of a [`RandomObjectGenerator`]:
/// integers default to their full width, floats to `[-∞, +∞]` under
/// [`Scale::Exponential`], strings to 0 to 32 characters of
/// [`CharacterSet::Atom`](crate::strings::CharacterSet::Atom), and dates to
/// the Unix epoch up to now. Methods with a suffix take the arguments
/// explicitly.
///
/// # Example
///
/// ```
/// use anyrandom::{AnyRandom, Scale};
///
/// let mut any = AnyRandom::seed_from_u64(42);
/// let port = any.uint16_between(1024, 65535).unwrap();
/// let ratio = any.double_scaled(0.0, 1.0, Scale::Flat).unwrap();
/// let name = any.string_from(5, 10, "abcdef").unwrap();
/// assert!(port >= 1024 && (0.0..=1.0).contains(&ratio));
/// assert!((5..=10).contains(&name.len()));
/// ```
#[derive(Clone, Debug)]
pub struct AnyRandom<G = StdGenerator<StdRng>> {
    generator: G,
}

impl AnyRandom {
    /// A facade over a [`StdRng`] seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// A facade over a [`StdRng`] with a fixed seed: the same seed gives the
    /// same sequence of values.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AnyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AnyRandom<StdGenerator<R>> {
    /// A facade over the caller's random source.
    pub fn from_rng(rng: R) -> Self {
        AnyRandom {
            generator: StdGenerator::new(rng),
        }
    }
}

macro_rules! integer_methods {
    ($($name:ident, $between:ident, $ty:ty;)*) => {
        $(
            #[doc = concat!("A random `", stringify!($ty), "` over its whole domain.")]
            pub fn $name(&mut self) -> Result<$ty, Error> {
                self.generator.$name(<$ty>::MIN, <$ty>::MAX)
            }

            #[doc = concat!("A random `", stringify!($ty), "` from `[min_value, max_value]`.")]
            pub fn $between(&mut self, min_value: $ty, max_value: $ty) -> Result<$ty, Error> {
                self.generator.$name(min_value, max_value)
            }
        )*
    };
}

macro_rules! float_methods {
    ($($name:ident, $from:ident, $between:ident, $scaled:ident, $ty:ident;)*) => {
        $(
            #[doc = concat!("A random `", stringify!($ty), "` from `[-∞, +∞]`, exponentially scaled.")]
            pub fn $name(&mut self) -> Result<$ty, Error> {
                self.$scaled($ty::NEG_INFINITY, $ty::INFINITY, Scale::Exponential)
            }

            #[doc = concat!("A random `", stringify!($ty), "` from `[min_value, +∞]`, exponentially scaled.")]
            pub fn $from(&mut self, min_value: $ty) -> Result<$ty, Error> {
                self.$scaled(min_value, $ty::INFINITY, Scale::Exponential)
            }

            #[doc = concat!("A random `", stringify!($ty), "` from `[min_value, max_value]`, exponentially scaled.")]
            pub fn $between(&mut self, min_value: $ty, max_value: $ty) -> Result<$ty, Error> {
                self.$scaled(min_value, max_value, Scale::Exponential)
            }

            #[doc = concat!("A random `", stringify!($ty), "` from `[min_value, max_value]` under `scale`.")]
            pub fn $scaled(&mut self, min_value: $ty, max_value: $ty, scale: Scale) -> Result<$ty, Error> {
                self.generator.$name(min_value, max_value, scale)
            }
        )*
    };
}

impl<G: RandomObjectGenerator> AnyRandom<G> {
    /// A facade over any generator.
    pub fn with_generator(generator: G) -> Self {
        AnyRandom { generator }
    }

    /// The underlying generator.
    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// Consume the facade, returning its generator.
    pub fn into_inner(self) -> G {
        self.generator
    }

    /// A fair coin.
    pub fn boolean(&mut self) -> bool {
        self.generator.boolean()
    }

    /// `-1` or `1`, or with `include_zero` one of `-1`, `0`, `1`.
    pub fn sign(&mut self, include_zero: bool) -> Result<i8, Error> {
        self.generator.sign(include_zero)
    }

    integer_methods! {
        int8, int8_between, i8;
        uint8, uint8_between, u8;
        int16, int16_between, i16;
        uint16, uint16_between, u16;
        int32, int32_between, i32;
        uint32, uint32_between, u32;
    }

    /// A random `i64` from `[min_value, max_value]`.
    ///
    /// There is no whole-domain variant: the range may need at most
    /// [`MAX_BITS`](crate::numbers::MAX_BITS) bits.
    pub fn int64_between(&mut self, min_value: i64, max_value: i64) -> Result<i64, Error> {
        self.generator.int64(min_value, max_value)
    }

    float_methods! {
        double, double_from, double_between, double_scaled, f64;
        single, single_from, single_between, single_scaled, f32;
    }

    /// A random character of the default alphabet.
    pub fn char(&mut self) -> Result<char, Error> {
        self.char_from(&DEFAULT_CHARACTER_SET)
    }

    /// A random character of `character_set`.
    pub fn char_from<S: AsRef<str> + ?Sized>(&mut self, character_set: &S) -> Result<char, Error> {
        self.generator.char(character_set.as_ref())
    }

    /// 0 to 32 random characters of the default alphabet.
    pub fn char_array(&mut self) -> Result<Vec<char>, Error> {
        self.char_array_between(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
    }

    /// `min_length` to `max_length` random characters of the default alphabet.
    pub fn char_array_between(
        &mut self,
        min_length: usize,
        max_length: usize,
    ) -> Result<Vec<char>, Error> {
        self.char_array_from(min_length, max_length, &DEFAULT_CHARACTER_SET)
    }

    /// `min_length` to `max_length` random characters of `character_set`.
    pub fn char_array_from<S: AsRef<str> + ?Sized>(
        &mut self,
        min_length: usize,
        max_length: usize,
        character_set: &S,
    ) -> Result<Vec<char>, Error> {
        self.generator
            .char_array(min_length, max_length, character_set.as_ref())
    }

    /// A string of 0 to 32 characters of the default alphabet.
    pub fn string(&mut self) -> Result<String, Error> {
        self.string_between(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
    }

    /// A string of `min_length` to `max_length` characters of the default
    /// alphabet.
    pub fn string_between(&mut self, min_length: usize, max_length: usize) -> Result<String, Error> {
        self.string_from(min_length, max_length, &DEFAULT_CHARACTER_SET)
    }

    /// A string of `min_length` to `max_length` characters of
    /// `character_set`.
    pub fn string_from<S: AsRef<str> + ?Sized>(
        &mut self,
        min_length: usize,
        max_length: usize,
        character_set: &S,
    ) -> Result<String, Error> {
        self.generator
            .string(min_length, max_length, character_set.as_ref())
    }

    /// An instant between the Unix epoch and now.
    pub fn date(&mut self) -> Result<DateTime<Utc>, Error> {
        self.date_since(DateTime::<Utc>::default())
    }

    /// An instant between `earliest` and now.
    pub fn date_since(&mut self, earliest: DateTime<Utc>) -> Result<DateTime<Utc>, Error> {
        self.date_between(earliest, Utc::now())
    }

    /// An instant from `[earliest, latest]`.
    pub fn date_between(
        &mut self,
        earliest: DateTime<Utc>,
        latest: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, Error> {
        self.generator.date(earliest, latest)
    }

    /// A version 4 UUID.
    pub fn uuid(&mut self) -> Uuid {
        self.generator.uuid()
    }

    /// A URL of the form `scheme://host.tld/`.
    pub fn url(&mut self) -> Result<String, Error> {
        self.url_with(UrlOptions::default())
    }

    /// A URL with the optional parts selected by `options`.
    pub fn url_with(&mut self, options: UrlOptions) -> Result<String, Error> {
        self.generator.url(options)
    }

    /// One element of `items`, uniformly.
    pub fn one_of<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, Error> {
        let last = items.len().checked_sub(1).ok_or(Error::new(
            ErrorKind::InvalidArgument,
            "items must not be empty",
        ))?;
        let index = self.generator.uint32(0, to_u32(last)?)?;
        Ok(&items[index as usize])
    }

    /// One of `T`'s variants, uniformly.
    pub fn variant<T: Variants + Copy>(&mut self) -> Result<T, Error> {
        self.one_of(T::VARIANTS).copied()
    }

    /// `count` values of `generator`.
    pub fn array_of<T, F>(&mut self, count: Count, mut generator: F) -> Result<Vec<T>, Error>
    where
        F: FnMut(&mut Self) -> T,
    {
        let n = self.count(count)?;
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(generator(self));
        }
        Ok(values)
    }

    /// Like [`array_of`](Self::array_of), for generators that can fail.
    ///
    /// # Example
    ///
    /// ```
    /// use anyrandom::seq::Count;
    /// use anyrandom::AnyRandom;
    ///
    /// let mut any = AnyRandom::new();
    /// let words = any
    ///     .try_array_of(Count::Exactly(3), |a| a.string_from(1, 5, "ab"))
    ///     .unwrap();
    /// assert_eq!(words.len(), 3);
    /// ```
    pub fn try_array_of<T, F>(&mut self, count: Count, mut generator: F) -> Result<Vec<T>, Error>
    where
        F: FnMut(&mut Self) -> Result<T, Error>,
    {
        let n = self.count(count)?;
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(generator(self)?);
        }
        Ok(values)
    }

    fn count(&mut self, count: Count) -> Result<usize, Error> {
        let (low, high) = match count {
            Count::Default => DEFAULT_ARRAY_COUNT,
            Count::Exactly(n) => return Ok(n),
            Count::Between(min, max) => (to_u32(min)?, to_u32(max)?),
        };
        self.generator.uint32(low, high).map(|n| n as usize)
    }
}

fn to_u32(n: usize) -> Result<u32, Error> {
    u32::try_from(n).map_err(|_| Error::new(ErrorKind::OutOfRange, "count exceeds u32::MAX"))
}

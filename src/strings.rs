// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Characters, strings and UUIDs
//!
//! Characters are drawn uniformly from an alphabet: one of the named
//! [`CharacterSet`]s or any other string. Alphabets are counted in `char`s,
//! not bytes, so multi-byte sets like [`CharacterSet::Greek`] are uniform
//! too.

use crate::error::{Error, ErrorKind};
use crate::numbers::uint32;
use crate::seq::Variants;
use core::fmt;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default lower bound of a random string length.
pub const DEFAULT_MIN_LENGTH: usize = 0;

/// Default upper bound of a random string length.
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// Default alphabet of random characters and strings.
pub const DEFAULT_CHARACTER_SET: CharacterSet = CharacterSet::Atom;

/// Named alphabets for testing string-handling code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CharacterSet {
    /// Lowercase English letters.
    Lowercase,
    /// Uppercase English letters.
    Uppercase,
    /// Upper- and lowercase English letters.
    Alpha,
    /// The digits 0 through 9.
    Numeric,
    /// Upper- and lowercase English letters and the digits 0 through 9.
    Alphanumeric,
    /// The characters ``!#$%&'*+-/=?^_`{|}~``.
    Symbols,
    /// [`Alphanumeric`](CharacterSet::Alphanumeric) followed by
    /// [`Symbols`](CharacterSet::Symbols): the characters allowed in an
    /// RFC 5322 atom.
    #[default]
    Atom,
    /// Upper- and lowercase Greek letters.
    Greek,
}

impl CharacterSet {
    /// The characters of this set, as a string.
    pub const fn as_str(self) -> &'static str {
        match self {
            CharacterSet::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterSet::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterSet::Alpha => "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
            CharacterSet::Numeric => "0123456789",
            CharacterSet::Alphanumeric => {
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"
            }
            CharacterSet::Symbols => "!#$%&'*+-/=?^_`{|}~",
            CharacterSet::Atom => {
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&'*+-/=?^_`{|}~"
            }
            CharacterSet::Greek => "ΑαΒβΓγΔδΕεΖζΗηΘθΙιΚκΛλΜμΝνΞξΟοΠπΡρΣσςϹϲΤτΥυΦφΧχΨψΩω",
        }
    }
}

impl AsRef<str> for CharacterSet {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Variants for CharacterSet {
    const VARIANTS: &'static [Self] = &[
        CharacterSet::Lowercase,
        CharacterSet::Uppercase,
        CharacterSet::Alpha,
        CharacterSet::Numeric,
        CharacterSet::Alphanumeric,
        CharacterSet::Symbols,
        CharacterSet::Atom,
        CharacterSet::Greek,
    ];
}

fn alphabet<S: AsRef<str> + ?Sized>(character_set: &S) -> Result<Vec<char>, Error> {
    let chars: Vec<char> = character_set.as_ref().chars().collect();
    if chars.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "character_set must not be empty",
        ));
    }
    Ok(chars)
}

#[inline]
fn pick<R: Rng + ?Sized>(rng: &mut R, chars: &[char]) -> Result<char, Error> {
    let index = uint32(rng, 0, chars.len() - 1)?;
    Ok(chars[index as usize])
}

/// Sample one character of `character_set`.
///
/// # Example
///
/// ```
/// use anyrandom::strings::{char, CharacterSet};
///
/// let c = char(&mut rand::rng(), &CharacterSet::Numeric).unwrap();
/// assert!(c.is_ascii_digit());
/// ```
pub fn char<R, S>(rng: &mut R, character_set: &S) -> Result<char, Error>
where
    R: Rng + ?Sized,
    S: AsRef<str> + ?Sized,
{
    pick(rng, &alphabet(character_set)?)
}

/// Sample between `min_length` and `max_length` characters of
/// `character_set`.
///
/// The alphabet is checked first, so an empty alphabet is an error even
/// when the sampled length is zero.
pub fn char_array<R, S>(
    rng: &mut R,
    min_length: usize,
    max_length: usize,
    character_set: &S,
) -> Result<Vec<char>, Error>
where
    R: Rng + ?Sized,
    S: AsRef<str> + ?Sized,
{
    let chars = alphabet(character_set)?;
    let length = uint32(rng, min_length, max_length)?;
    (0..length).map(|_| pick(rng, &chars)).collect()
}

/// Sample a string of between `min_length` and `max_length` characters of
/// `character_set`.
///
/// Lengths count `char`s, not bytes.
///
/// # Example
///
/// ```
/// use anyrandom::strings::string;
///
/// let s = string(&mut rand::rng(), 6, 8, "abc").unwrap();
/// assert!((6..=8).contains(&s.len()));
/// assert!(s.chars().all(|c| "abc".contains(c)));
/// ```
pub fn string<R, S>(
    rng: &mut R,
    min_length: usize,
    max_length: usize,
    character_set: &S,
) -> Result<String, Error>
where
    R: Rng + ?Sized,
    S: AsRef<str> + ?Sized,
{
    char_array(rng, min_length, max_length, character_set).map(|chars| chars.into_iter().collect())
}

/// Sample a version 4 (random) UUID.
pub fn uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

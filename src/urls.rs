// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random URLs
//!
//! Every generated URL is valid per RFC 3986, but only a small, regular
//! subset of valid URLs is ever produced:
//!
//! ```text
//! scheme://host.tld/seg/seg?key=value&key=value#fragment
//! ```

use crate::error::Error;
use crate::seq::{try_array_of, variant, Count, Variants};
use crate::strings::{string, CharacterSet};
use core::fmt;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const HOST_CHARS: &str = "abcdefghijklmnopqrstuvwxyz0123456789-._";
const PATH_CHARS: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// URL schemes used by [`url`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum Scheme {
    About,
    Data,
    File,
    Ftp,
    Http,
    Https,
    Irc,
    Mailto,
}

impl Scheme {
    /// The scheme name, without the `:` separator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Scheme::About => "about",
            Scheme::Data => "data",
            Scheme::File => "file",
            Scheme::Ftp => "ftp",
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::Irc => "irc",
            Scheme::Mailto => "mailto",
        }
    }
}

impl Variants for Scheme {
    const VARIANTS: &'static [Self] = &[
        Scheme::About,
        Scheme::Data,
        Scheme::File,
        Scheme::Ftp,
        Scheme::Http,
        Scheme::Https,
        Scheme::Irc,
        Scheme::Mailto,
    ];
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic top-level domains used by [`url`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum TopLevelDomain {
    Com,
    Org,
    Net,
    Int,
    Edu,
    Gov,
    Mil,
}

impl TopLevelDomain {
    /// The domain label, without the leading dot.
    pub const fn as_str(self) -> &'static str {
        match self {
            TopLevelDomain::Com => "com",
            TopLevelDomain::Org => "org",
            TopLevelDomain::Net => "net",
            TopLevelDomain::Int => "int",
            TopLevelDomain::Edu => "edu",
            TopLevelDomain::Gov => "gov",
            TopLevelDomain::Mil => "mil",
        }
    }
}

impl Variants for TopLevelDomain {
    const VARIANTS: &'static [Self] = &[
        TopLevelDomain::Com,
        TopLevelDomain::Org,
        TopLevelDomain::Net,
        TopLevelDomain::Int,
        TopLevelDomain::Edu,
        TopLevelDomain::Gov,
        TopLevelDomain::Mil,
    ];
}

impl fmt::Display for TopLevelDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional parts of a generated URL. All are off by default, giving
/// `scheme://host.tld/`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UrlOptions {
    /// Add one to three path segments.
    pub path: bool,
    /// Add a query of one to three `key=value` pairs.
    pub query: bool,
    /// Add a fragment.
    pub fragment: bool,
}

impl UrlOptions {
    /// Every optional part switched on.
    pub const ALL: UrlOptions = UrlOptions {
        path: true,
        query: true,
        fragment: true,
    };
}

/// Sample a URL.
///
/// # Example
///
/// ```
/// use anyrandom::urls::{url, UrlOptions};
///
/// let u = url(&mut rand::rng(), UrlOptions::default()).unwrap();
/// assert!(u.contains("://") && u.ends_with('/'));
/// ```
pub fn url<R: Rng + ?Sized>(rng: &mut R, options: UrlOptions) -> Result<String, Error> {
    let scheme: Scheme = variant(rng)?;
    let authority = authority(rng)?;
    let path = if options.path {
        path(rng)?
    } else {
        String::from("/")
    };
    let query = if options.query {
        query(rng)?
    } else {
        String::new()
    };
    let fragment = if options.fragment {
        fragment(rng)?
    } else {
        String::new()
    };

    let url = format!("{}://{}{}{}{}", scheme, authority, path, query, fragment);
    Ok(url.to_lowercase())
}

fn authority<R: Rng + ?Sized>(rng: &mut R) -> Result<String, Error> {
    let first = string(rng, 1, 1, &CharacterSet::Lowercase)?;
    let middle = string(rng, 10, 15, HOST_CHARS)?;
    let last = string(rng, 1, 1, &CharacterSet::Lowercase)?;
    let tld: TopLevelDomain = variant(rng)?;
    Ok(format!("{}{}{}.{}", first, middle, last, tld))
}

fn path<R: Rng + ?Sized>(rng: &mut R) -> Result<String, Error> {
    let segments = try_array_of(rng, Count::Between(1, 3), |rng| {
        string(rng, 6, 8, PATH_CHARS)
    })?;
    Ok(format!("/{}", segments.join("/")))
}

fn query<R: Rng + ?Sized>(rng: &mut R) -> Result<String, Error> {
    let pairs = try_array_of(rng, Count::Between(1, 3), |rng| {
        let key = string(rng, 6, 8, &CharacterSet::Lowercase)?;
        let value = string(rng, 6, 8, PATH_CHARS)?;
        Ok(format!("{}={}", key, value))
    })?;
    Ok(format!("?{}", pairs.join("&")))
}

fn fragment<R: Rng + ?Sized>(rng: &mut R) -> Result<String, Error> {
    Ok(format!("#{}", string(rng, 6, 8, PATH_CHARS)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_path_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit()
    }

    /// Split a generated URL into scheme, host, tld, path, query and fragment,
    /// dropping the `?` and `#` separators.
    fn split(url: &str) -> (&str, &str, &str, &str, &str, &str) {
        let (scheme, rest) = url.split_once("://").unwrap();
        let slash = rest.find('/').unwrap();
        let (authority, rest) = rest.split_at(slash);
        let (host, tld) = authority.rsplit_once('.').unwrap();
        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        (scheme, host, tld, path, query, fragment)
    }

    #[test]
    fn test_minimal_url() {
        let mut rng = crate::test::rng(601);
        for _ in 0..200 {
            let u = url(&mut rng, UrlOptions::default()).unwrap();
            let (scheme, host, tld, path, query, fragment) = split(&u);

            assert!(Scheme::VARIANTS.iter().any(|s| s.as_str() == scheme), "{}", u);
            assert!(TopLevelDomain::VARIANTS.iter().any(|t| t.as_str() == tld), "{}", u);
            assert_eq!(path, "/");
            assert_eq!(query, "");
            assert_eq!(fragment, "");

            // the host may itself contain dots, but starts and ends with a letter
            let host: Vec<char> = host.chars().collect();
            assert!((12..=17).contains(&host.len()), "{}", u);
            assert!(host[0].is_ascii_lowercase());
            assert!(host[host.len() - 1].is_ascii_lowercase());
            assert!(host.iter().all(|&c| HOST_CHARS.contains(c)));
        }
    }

    #[test]
    fn test_full_url() {
        let mut rng = crate::test::rng(602);
        for _ in 0..200 {
            let u = url(&mut rng, UrlOptions::ALL).unwrap();
            assert_eq!(u, u.to_lowercase());
            let (_, _, _, path, query, fragment) = split(&u);

            let segments: Vec<&str> = path[1..].split('/').collect();
            assert!((1..=3).contains(&segments.len()), "{}", u);
            for s in segments {
                assert!((6..=8).contains(&s.len()) && s.chars().all(is_path_char), "{}", u);
            }

            let pairs: Vec<&str> = query.split('&').collect();
            assert!((1..=3).contains(&pairs.len()), "{}", u);
            for pair in pairs {
                let (key, value) = pair.split_once('=').unwrap();
                assert!((6..=8).contains(&key.len()));
                assert!(key.chars().all(|c| c.is_ascii_lowercase()));
                assert!((6..=8).contains(&value.len()));
                assert!(value.chars().all(is_path_char));
            }

            assert!(fragment.len() >= 6 && fragment.len() <= 8, "{}", u);
            assert!(fragment.chars().all(is_path_char));
        }
    }

    #[test]
    fn test_all_schemes_appear() {
        let mut rng = crate::test::rng(603);
        let mut seen = [false; 8];
        for _ in 0..400 {
            let u = url(&mut rng, UrlOptions::default()).unwrap();
            let (scheme, ..) = split(&u);
            let i = Scheme::VARIANTS
                .iter()
                .position(|s| s.as_str() == scheme)
                .unwrap();
            seen[i] = true;
        }
        assert_eq!(seen, [true; 8]);
    }
}

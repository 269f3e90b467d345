// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-random values for fabricating test data.
//!
//! # Quick start
//!
//! ```
//! use anyrandom::AnyRandom;
//!
//! let mut any = AnyRandom::new();
//! let id = any.uuid();
//! let name = any.string().unwrap();
//! let balance = any.double().unwrap();
//! println!("{} {:?} {}", id, name, balance);
//! ```
//!
//! # The numeric engine
//!
//! Everything is built on two samplers in [`numbers`]:
//!
//! - [`numbers::sample_integer`] draws integers uniformly from an inclusive
//!   range of a fixed-width integer kind. It rejection-samples masked random
//!   bytes, so it has no modulo bias, and refuses ranges needing more than
//!   53 bits.
//! - [`numbers::sample_scaled_float`] draws floating-point numbers from
//!   ranges of any magnitude, including infinite bounds. Under
//!   [`Scale::Exponential`] (the default) samples are spread evenly over
//!   orders of magnitude instead of being dominated by the largest bound.
//!
//! Both take any [`rand::Rng`] as their random source. Characters, strings,
//! dates, UUIDs, URLs, and array and enum sampling in [`strings`],
//! [`dates`], [`urls`] and [`seq`] are composed from them.
//!
//! # The facade
//!
//! [`AnyRandom`] owns a random source and supplies default arguments, e.g.
//! full-width integers and `[-∞, +∞]` doubles. It forwards to a
//! [`RandomObjectGenerator`](generator::RandomObjectGenerator), which can be
//! replaced to inject fixed or recorded values.
//!
//! # Crate features
//!
//! - `log`: emit [`log`](https://docs.rs/log) records when samplers reject
//!   candidates or fall back to the flat scale
//! - `serde`: implement `Serialize` and `Deserialize` for the option and
//!   selector types ([`Scale`], [`numbers::Precision`],
//!   [`strings::CharacterSet`], [`urls::Scheme`], [`urls::TopLevelDomain`],
//!   [`urls::UrlOptions`])

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::float_cmp, clippy::neg_cmp_op_on_partial_ord)]

#[macro_use]
mod log_macros;

mod any;
pub mod dates;
pub mod error;
pub mod generator;
pub mod numbers;
pub mod rngs;
pub mod seq;
pub mod strings;
pub mod urls;

pub use crate::any::AnyRandom;
pub use crate::error::{Error, ErrorKind};
pub use crate::numbers::Scale;
pub use crate::strings::CharacterSet;
pub use crate::urls::UrlOptions;

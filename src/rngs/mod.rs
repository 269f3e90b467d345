// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random number generators used by this crate.
//!
//! Production code draws from any [`rand::Rng`]; [`StdRng`] is the default
//! behind [`AnyRandom`](crate::AnyRandom). The [`mock`] module holds a
//! scripted generator for deterministic tests.

pub mod mock;

pub use rand::rngs::StdRng;

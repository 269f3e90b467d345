// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mock random number generator

use rand_core::{impls, RngCore};

/// A mock generator replaying a fixed script of words
///
/// Each call to `next_u64` yields the next word of the script, starting over
/// once the script is exhausted. An empty script yields zeros.
///
/// `next_u32` truncates the next word and `fill_bytes` is built from
/// `next_u64`/`next_u32`, so every request for randomness consumes at least
/// one word. [`ScriptedRng::words_drawn`] counts them, which lets tests
/// assert how many attempts a sampler made.
///
/// # Example
///
/// ```
/// use rand::RngCore;
/// use anyrandom::rngs::mock::ScriptedRng;
///
/// let mut rng = ScriptedRng::new(&[3, 0x1_0000_0007]);
/// assert_eq!(rng.next_u64(), 3);
/// assert_eq!(rng.next_u32(), 7);
/// assert_eq!(rng.next_u64(), 3);
/// assert_eq!(rng.words_drawn(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRng {
    script: Vec<u64>,
    pos: usize,
    drawn: usize,
}

impl ScriptedRng {
    /// Create a `ScriptedRng` cycling through `script`.
    pub fn new(script: &[u64]) -> Self {
        ScriptedRng {
            script: script.to_vec(),
            pos: 0,
            drawn: 0,
        }
    }

    /// Number of words handed out so far.
    pub fn words_drawn(&self) -> usize {
        self.drawn
    }
}

impl RngCore for ScriptedRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.drawn += 1;
        if self.script.is_empty() {
            return 0;
        }
        let res = self.script[self.pos];
        self.pos = (self.pos + 1) % self.script.len();
        res
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

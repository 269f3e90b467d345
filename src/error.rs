// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error kind which can be matched over.
///
/// Every kind is a contract violation by the caller: none of them resolves
/// itself on retry.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A bound is not an integer, a range is empty or inverted, or a
    /// collection argument (alphabet, slice) is empty.
    InvalidArgument,
    /// An integer bound lies outside the domain of its
    /// [`BitWidthProfile`](crate::numbers::BitWidthProfile).
    OutOfRange,
    /// The range needs more than [`MAX_BITS`](crate::numbers::MAX_BITS) bits
    /// of entropy, or the random source never produced an in-range value.
    RangeTooLarge,
}

impl ErrorKind {
    /// A description of this error kind
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::RangeTooLarge => "range too large",
        }
    }
}

/// Error type of the samplers and generators in this crate
///
/// This is a relatively simple error type: it embeds a "kind" code and a
/// message (static string only). It is `Copy`, so it can be returned from
/// deep inside a sampling loop without allocation.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Error {
    kind: ErrorKind,
    msg: &'static str,
}

impl Error {
    /// Create a new instance, with specified kind and a message.
    pub const fn new(kind: ErrorKind, msg: &'static str) -> Self {
        Error { kind, msg }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn msg(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.description(), self.msg)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::new(ErrorKind::OutOfRange, "min_value is below the profile minimum");
        assert_eq!(
            err.to_string(),
            "out of range: min_value is below the profile minimum"
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.msg(), "min_value is below the profile minimum");
    }

    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(Error::new(ErrorKind::RangeTooLarge, "too many bits"));
        assert!(err.to_string().starts_with("range too large"));
    }
}

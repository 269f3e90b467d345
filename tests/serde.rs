// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg(feature = "serde")]

use anyrandom::numbers::Precision;
use anyrandom::urls::{Scheme, TopLevelDomain};
use anyrandom::{CharacterSet, Scale, UrlOptions};

#[test]
fn test_serialization_options() {
    let options = UrlOptions {
        path: true,
        query: false,
        fragment: true,
    };
    let de: UrlOptions = bincode::deserialize(&bincode::serialize(&options).unwrap()).unwrap();
    assert_eq!(options, de);

    let selectors = (
        Scale::Flat,
        Precision::Single,
        CharacterSet::Greek,
        Scheme::Mailto,
        TopLevelDomain::Mil,
    );
    let de: (Scale, Precision, CharacterSet, Scheme, TopLevelDomain) =
        bincode::deserialize(&bincode::serialize(&selectors).unwrap()).unwrap();
    assert_eq!(selectors, de);
}

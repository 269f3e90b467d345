// Copyright 2024 Developers of the AnyRandom project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random instants in time
//!
//! A date is a millisecond timestamp interpolated linearly between two
//! instants, so every millisecond of the range is about equally likely.

use crate::error::{Error, ErrorKind};
use crate::numbers::{double, Scale};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Sample an instant from `[earliest, latest]`, at millisecond resolution.
///
/// The result is clamped to the range, so it never precedes `earliest` even
/// when `earliest` has sub-millisecond precision.
///
/// # Example
///
/// ```
/// use anyrandom::dates::date;
/// use chrono::{TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2000, 12, 31, 23, 59, 59).unwrap();
/// let d = date(&mut rand::rng(), start, end).unwrap();
/// assert!(start <= d && d <= end);
/// ```
pub fn date<R: Rng + ?Sized>(
    rng: &mut R,
    earliest: DateTime<Utc>,
    latest: DateTime<Utc>,
) -> Result<DateTime<Utc>, Error> {
    if earliest == latest {
        return Ok(earliest);
    }
    if earliest > latest {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "earliest must be <= latest",
        ));
    }

    let lhs = earliest.timestamp_millis();
    let rhs = latest.timestamp_millis();
    let between = double(rng, lhs as f64, rhs as f64, Scale::Flat)?;
    let millis = (between.round() as i64).clamp(lhs, rhs);

    let instant = DateTime::<Utc>::from_timestamp_millis(millis).ok_or(Error::new(
        ErrorKind::OutOfRange,
        "timestamp is not representable",
    ))?;
    Ok(instant.clamp(earliest, latest))
}

/// Sample an instant from `[earliest, now]`.
pub fn date_since<R: Rng + ?Sized>(
    rng: &mut R,
    earliest: DateTime<Utc>,
) -> Result<DateTime<Utc>, Error> {
    date(rng, earliest, Utc::now())
}

/// Sample an instant between the Unix epoch and now.
pub fn any_date<R: Rng + ?Sized>(rng: &mut R) -> Result<DateTime<Utc>, Error> {
    // the default DateTime<Utc> is 1970-01-01T00:00:00Z
    date_since(rng, DateTime::<Utc>::default())
}

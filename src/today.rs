//! Time-zone anchored "today".
//!
//! Civil dates are taken from the wall clock of a named zone, so that a
//! device in another zone agrees with Tehran on which day it is.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

pub const TEHRAN: Tz = chrono_tz::Asia::Tehran;

/// Today's civil date in Tehran.
pub fn today() -> NaiveDate {
    today_in(TEHRAN)
}

/// Today's civil date in `tz`.
pub fn today_in(tz: Tz) -> NaiveDate {
    civil_date(Utc::now(), tz)
}

/// The civil date of `instant` on the wall clock of `tz`.
pub fn civil_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    tz.from_utc_datetime(&instant.naive_utc()).date_naive()
}

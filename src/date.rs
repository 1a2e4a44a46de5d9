//! Date value types for the three supported calendars.
//!
//! All three are plain `Copy` values ordered by (year, month, day). The
//! `new` constructors validate; struct literals do not, so conversion
//! functions re-check their inputs.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::calendar::day_number_to_naive;
use crate::error::CalendarError;
use crate::{gregorian, hijri, jalali};

/// A date in the Jalali (solar Hijri) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A date in the lunar Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    /// A validated Jalali date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !jalali::is_valid_jalali_date(year, month, day) {
            return Err(CalendarError::InvalidJalaliDate { year, month, day });
        }
        Ok(JalaliDate { year, month, day })
    }

    /// Gregorian date of this date. Fails for an invalid struct literal.
    pub fn to_gregorian(self) -> Result<GregorianDate, CalendarError> {
        jalali::jalali_to_gregorian(self.year, self.month, self.day)
    }

    pub fn to_hijri(self) -> Result<HijriDate, CalendarError> {
        hijri::jalali_to_hijri(self.year, self.month, self.day)
    }

    /// Civil date of this date.
    pub fn to_naive(self) -> Result<NaiveDate, CalendarError> {
        self.to_gregorian()?.to_naive()
    }

    /// Converts a civil date. Fails only when the year falls outside the
    /// range of the Jalali leap-year table.
    pub fn from_naive(date: NaiveDate) -> Result<Self, CalendarError> {
        jalali::gregorian_to_jalali(date.year(), date.month(), date.day())
    }
}

impl GregorianDate {
    /// A validated Gregorian date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !gregorian::is_valid_gregorian_date(year, month, day) {
            return Err(CalendarError::InvalidGregorianDate { year, month, day });
        }
        Ok(GregorianDate { year, month, day })
    }

    pub fn to_naive(self) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(
            CalendarError::InvalidGregorianDate {
                year: self.year,
                month: self.month,
                day: self.day,
            },
        )
    }

    pub fn to_jalali(self) -> Result<JalaliDate, CalendarError> {
        jalali::gregorian_to_jalali(self.year, self.month, self.day)
    }

    pub fn to_hijri(self) -> Result<HijriDate, CalendarError> {
        hijri::gregorian_to_hijri(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        GregorianDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl TryFrom<GregorianDate> for NaiveDate {
    type Error = CalendarError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        date.to_naive()
    }
}

impl HijriDate {
    /// A validated Hijri date. Month lengths follow [`hijri::hijri_month_length`].
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !hijri::is_valid_hijri_date(year, month, day) {
            return Err(CalendarError::InvalidHijriDate { year, month, day });
        }
        Ok(HijriDate { year, month, day })
    }

    pub fn to_gregorian(self) -> Result<GregorianDate, CalendarError> {
        hijri::hijri_to_gregorian(self.year, self.month, self.day)
    }

    pub fn to_jalali(self) -> Result<JalaliDate, CalendarError> {
        hijri::hijri_to_jalali(self.year, self.month, self.day)
    }

    /// Civil date of this Hijri date. Goes through the day count directly, so
    /// dates before the 1582 reform come out proleptic like any `NaiveDate`.
    pub fn to_naive(self) -> Result<NaiveDate, CalendarError> {
        let n = hijri::hijri_to_julian_day(self.year, self.month, self.day)?;
        day_number_to_naive(n).ok_or(CalendarError::InvalidHijriDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }

    /// Hijri date of a civil date, confirmed where published.
    pub fn from_naive(date: NaiveDate) -> Self {
        hijri::date_to_hijri(date)
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

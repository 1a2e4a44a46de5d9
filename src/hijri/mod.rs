//! Hijri (Islamic lunar) calendar conversion
//!
//! Conversion starts from the tabular Islamic calendar (the arithmetical
//! civil calendar with a 30-year cycle of 11 leap years) routed through the
//! Julian Day bridge, then passes through the confirmed-month layer in
//! [`confirmed`], which replaces the approximation for years whose month
//! lengths have been published from local moon sighting.
//!
//! ## Accuracy
//!
//! Outside the confirmed years the result is the tabular approximation, which
//! may differ by ±1 day from the observed calendar. That is a documented
//! degradation, not an error.

pub mod confirmed;

use chrono::NaiveDate;

use crate::calendar::naive_to_day_number;
use crate::date::{GregorianDate, HijriDate, JalaliDate};
use crate::error::CalendarError;
use crate::gregorian::is_valid_gregorian_date;
use crate::jalali;
use crate::julian_day::{gregorian_to_julian_day, julian_day_to_gregorian};

pub use confirmed::{
    adjust_gregorian_to_confirmed, adjust_hijri_to_confirmed, confirmed_month_length,
    is_supported_hijri_year,
};

/// Julian Day Number of 1 Muharram 1 AH (civil epoch, July 16, 622 Julian)
pub const ISLAMIC_EPOCH: i64 = 1_948_440;

/// Returns true if Dhu al-Hijjah has 30 days in the tabular calendar.
pub fn is_tabular_leap_year(year: i32) -> bool {
    (14 + 11 * year as i64).rem_euclid(30) < 11
}

/// Month length in the tabular calendar: odd months have 30 days, even
/// months 29, and Dhu al-Hijjah 30 in leap years.
pub fn tabular_month_length(year: i32, month: u32) -> u32 {
    match month {
        12 if is_tabular_leap_year(year) => 30,
        1..=12 if month % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

/// Julian Day Number of a tabular Hijri date. Total; does not validate.
pub(crate) fn tabular_to_julian_day(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    // ceil(29.5 * (m - 1))
    let month_days = (59 * (m - 1) + 1).div_euclid(2);
    day as i64 + month_days + (y - 1) * 354 + (3 + 11 * y).div_euclid(30) + ISLAMIC_EPOCH - 1
}

fn ceil_div(a: i64, b: i64) -> i64 {
    -(-a).div_euclid(b)
}

/// Tabular Hijri date of a Julian Day Number.
pub(crate) fn julian_day_to_tabular(jdn: i64) -> HijriDate {
    let year = (30 * (jdn - ISLAMIC_EPOCH) + 10_646).div_euclid(10_631) as i32;
    let year_start = tabular_to_julian_day(year, 1, 1);
    // ceil((jdn - (29 + year_start)) / 29.5) + 1
    let month = (ceil_div(2 * (jdn - 29 - year_start), 59) + 1).clamp(1, 12) as u32;
    let day = (jdn - tabular_to_julian_day(year, month, 1) + 1) as u32;

    HijriDate { year, month, day }
}

/// Approximate Hijri date of a Gregorian date (tabular calendar).
///
/// # Arguments
/// * `year` - Gregorian year
/// * `month` - Gregorian month (1-12)
/// * `day` - Gregorian day (1-31)
pub fn gregorian_to_hijri_approx(year: i32, month: u32, day: u32) -> HijriDate {
    julian_day_to_tabular(gregorian_to_julian_day(year, month, day))
}

/// Approximate Gregorian date of a Hijri date (tabular calendar).
pub fn hijri_to_gregorian_approx(year: i32, month: u32, day: u32) -> GregorianDate {
    julian_day_to_gregorian(tabular_to_julian_day(year, month, day))
}

/// Length of a Hijri month: confirmed where published, tabular otherwise.
pub fn hijri_month_length(year: i32, month: u32) -> u32 {
    confirmed_month_length(year, month).unwrap_or_else(|| tabular_month_length(year, month))
}

/// Returns true if the month is 1-12 and the day fits its (confirmed or
/// tabular) length.
pub fn is_valid_hijri_date(year: i32, month: u32, day: u32) -> bool {
    year >= 1 && (1..=12).contains(&month) && day >= 1 && day <= hijri_month_length(year, month)
}

/// Hijri date of a Gregorian date, confirmed where published. Dates before
/// 1582-10-15 are read as Julian calendar dates.
pub fn gregorian_to_hijri(year: i32, month: u32, day: u32) -> Result<HijriDate, CalendarError> {
    if !is_valid_gregorian_date(year, month, day) {
        return Err(CalendarError::InvalidGregorianDate { year, month, day });
    }
    Ok(adjust_hijri_to_confirmed(gregorian_to_hijri_approx(
        year, month, day,
    )))
}

/// Gregorian date of a Hijri date, on the same calendar as [`gregorian_to_hijri`].
pub fn hijri_to_gregorian(year: i32, month: u32, day: u32) -> Result<GregorianDate, CalendarError> {
    if !is_valid_hijri_date(year, month, day) {
        return Err(CalendarError::InvalidHijriDate { year, month, day });
    }
    let approx = hijri_to_gregorian_approx(year, month, day);
    Ok(adjust_gregorian_to_confirmed(year, month, day, approx))
}

/// Hijri date of a civil date.
///
/// `NaiveDate` is proleptic Gregorian, so this goes through the day count
/// and not through [`gregorian_to_hijri`], which reads dates before
/// 1582-10-15 as Julian calendar dates.
pub fn date_to_hijri(date: NaiveDate) -> HijriDate {
    julian_day_to_hijri(naive_to_day_number(date))
}

/// Hijri date of a Julian Day Number, confirmed where published.
pub(crate) fn julian_day_to_hijri(jdn: i64) -> HijriDate {
    adjust_hijri_to_confirmed(julian_day_to_tabular(jdn))
}

/// Julian Day Number of a validated Hijri date.
pub(crate) fn hijri_to_julian_day(year: i32, month: u32, day: u32) -> Result<i64, CalendarError> {
    if !is_valid_hijri_date(year, month, day) {
        return Err(CalendarError::InvalidHijriDate { year, month, day });
    }
    Ok(confirmed::confirmed_julian_day(year, month, day)
        .unwrap_or_else(|| tabular_to_julian_day(year, month, day)))
}

/// Hijri date of a Jalali date.
pub fn jalali_to_hijri(year: i32, month: u32, day: u32) -> Result<HijriDate, CalendarError> {
    let g = jalali::jalali_to_gregorian(year, month, day)?;
    gregorian_to_hijri(g.year, g.month, g.day)
}

/// Jalali date of a Hijri date.
pub fn hijri_to_jalali(year: i32, month: u32, day: u32) -> Result<JalaliDate, CalendarError> {
    let g = hijri_to_gregorian(year, month, day)?;
    jalali::gregorian_to_jalali(g.year, g.month, g.day)
}

//! Jalali (solar Hijri) calendar
//!
//! Conversion follows the widely used break-table algorithm: leap years are
//! derived from a table of years where the 33-year cycle pattern shifts, which
//! matches the astronomical calendar from -61 to 3177 AP. Years outside that
//! range are rejected with [`CalendarError::JalaliYearOutOfRange`].
//!
//! Days are exchanged with the Gregorian calendar through proleptic day
//! numbers (see [`crate::gregorian`]).
//!
//! ## Weeks
//!
//! Weeks are blocks of seven days aligned to a [`WeekStart`]. Week 1 of a
//! year is the block containing Farvardin 1, and every day is numbered
//! within its own year, so the last days of Esfand form a short final week
//! rather than spilling into the next year. Week boundaries are clipped to
//! the year: the first and last weeks may each be shorter than seven days.
//! A year has 53 weeks, or 54 when a leap year starts on the last day of a
//! block.

use crate::date::{GregorianDate, JalaliDate};
use crate::error::CalendarError;
use crate::gregorian::{self, day_number_to_gregorian, gregorian_to_day_number};
use crate::options::WeekStart;
use crate::week;

/// Jalali years at which the leap cycle pattern breaks.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

pub const MIN_YEAR: i32 = BREAKS[0];
pub const MAX_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Result of the break-table walk for one Jalali year.
struct YearInfo {
    /// Years since the last leap year (0 means `year` is leap)
    leap: i32,
    /// Gregorian year in which the Jalali year starts
    gregorian_year: i32,
    /// March day of Farvardin 1
    march: u32,
}

fn year_info(year: i32) -> Result<YearInfo, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::JalaliYearOutOfRange { year });
    }

    let gregorian_year = year + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = year - jp;

    // Leap years from AD 621 to the start of this year, Jalali then Gregorian
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }
    let leap_g = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;

    let march = (20 + leap_j - leap_g) as u32;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(YearInfo {
        leap,
        gregorian_year,
        march,
    })
}

/// Returns true if Esfand of `year` has 30 days.
///
/// Years outside the supported range are never leap.
pub fn is_leap_jalali_year(year: i32) -> bool {
    year_info(year).map(|info| info.leap == 0).unwrap_or(false)
}

/// Number of days in a Jalali month, or 0 for a month outside 1-12.
pub fn jalali_month_length(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_jalali_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// 366 for leap years, 365 otherwise.
pub fn jalali_year_length(year: i32) -> u32 {
    if is_leap_jalali_year(year) {
        366
    } else {
        365
    }
}

/// Returns true if the date exists and its year is within the supported range.
pub fn is_valid_jalali_date(year: i32, month: u32, day: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
        && (1..=12).contains(&month)
        && day >= 1
        && day <= jalali_month_length(year, month)
}

/// 1-based day of the year. Does not validate.
pub fn day_of_year(month: u32, day: u32) -> u32 {
    days_before_month(month) + day
}

fn days_before_month(month: u32) -> u32 {
    if month <= 7 {
        (month.saturating_sub(1)) * 31
    } else {
        186 + (month - 7) * 30
    }
}

/// Season (1-4) of a Jalali month.
pub fn season_of_month(month: u32) -> u32 {
    (month.clamp(1, 12) - 1) / 3 + 1
}

/// Day number of Farvardin 1.
fn farvardin_first(year: i32) -> Result<i64, CalendarError> {
    let info = year_info(year)?;
    Ok(gregorian_to_day_number(info.gregorian_year, 3, info.march))
}

/// Day number of a Jalali date, validated.
pub fn jalali_to_day_number(year: i32, month: u32, day: u32) -> Result<i64, CalendarError> {
    if !is_valid_jalali_date(year, month, day) {
        return Err(CalendarError::InvalidJalaliDate { year, month, day });
    }
    Ok(farvardin_first(year)? + (days_before_month(month) + day - 1) as i64)
}

/// Jalali date of a day number.
pub fn day_number_to_jalali(day_number: i64) -> Result<JalaliDate, CalendarError> {
    // The Jalali year that begins in the same Gregorian year, capped so the
    // last months of MAX_YEAR still resolve
    let mut year = (day_number_to_gregorian(day_number).year - 621).min(MAX_YEAR);
    let mut start = farvardin_first(year)?;
    if day_number < start {
        year -= 1;
        start = farvardin_first(year)?;
    }

    // Days passed since Farvardin 1
    let k = day_number - start;
    if k >= jalali_year_length(year) as i64 {
        return Err(CalendarError::JalaliYearOutOfRange { year: year + 1 });
    }
    let (month, day) = if k <= 185 {
        (1 + k / 31, k % 31 + 1)
    } else {
        let k = k - 186;
        (7 + k / 30, k % 30 + 1)
    };

    Ok(JalaliDate {
        year,
        month: month as u32,
        day: day as u32,
    })
}

/// Gregorian date of a Jalali date.
pub fn jalali_to_gregorian(
    year: i32,
    month: u32,
    day: u32,
) -> Result<GregorianDate, CalendarError> {
    jalali_to_day_number(year, month, day).map(day_number_to_gregorian)
}

/// Jalali date of a Gregorian date.
pub fn gregorian_to_jalali(year: i32, month: u32, day: u32) -> Result<JalaliDate, CalendarError> {
    if !gregorian::is_valid_gregorian_date(year, month, day) {
        return Err(CalendarError::InvalidGregorianDate { year, month, day });
    }
    day_number_to_jalali(gregorian_to_day_number(year, month, day))
}

/// Move a (year, month) pair by `offset` months, rolling over year
/// boundaries in either direction.
pub fn add_months(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let index = year as i64 * 12 + (month.clamp(1, 12) as i64 - 1) + offset as i64;
    (index.div_euclid(12) as i32, index.rem_euclid(12) as u32 + 1)
}

/// Add a signed number of days to a Jalali date.
pub fn add_days(date: JalaliDate, days: i64) -> Result<JalaliDate, CalendarError> {
    let n = jalali_to_day_number(date.year, date.month, date.day)?;
    day_number_to_jalali(n + days)
}

// ============================================================================
// Weeks
// ============================================================================

/// A week number together with the Jalali year it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearWeek {
    pub year: i32,
    pub week: u32,
}

/// Day numbers of Farvardin 1 of `year` and of the year after. The second
/// is derived from the year length so it exists even for [`MAX_YEAR`].
fn year_bounds(year: i32) -> Result<(i64, i64), CalendarError> {
    let first = farvardin_first(year)?;
    Ok((first, first + jalali_year_length(year) as i64))
}

/// The first day on or after Farvardin 1 that falls on `week_start`.
pub fn first_week_start_of_year(
    year: i32,
    week_start: WeekStart,
) -> Result<JalaliDate, CalendarError> {
    day_number_to_jalali(week::next_aligned(farvardin_first(year)?, week_start))
}

/// Number of weeks in `year`, including a short final week.
pub fn weeks_in_year(year: i32, week_start: WeekStart) -> Result<u32, CalendarError> {
    let (first, next) = year_bounds(year)?;
    Ok(week::weeks_in_year(first, next, week_start))
}

/// Week number of a Jalali date within its own year.
pub fn week_number(date: JalaliDate, week_start: WeekStart) -> Result<YearWeek, CalendarError> {
    let n = jalali_to_day_number(date.year, date.month, date.day)?;
    Ok(YearWeek {
        year: date.year,
        week: week::week_of(n, farvardin_first(date.year)?, week_start),
    })
}

fn week_day_numbers(
    year: i32,
    week: u32,
    week_start: WeekStart,
) -> Result<(i64, i64), CalendarError> {
    let (first, next) = year_bounds(year)?;
    week::week_days(first, next, week, week_start).ok_or(CalendarError::InvalidWeek { year, week })
}

/// First day of a numbered week. Week 1 starts on Farvardin 1.
pub fn start_of_week(
    year: i32,
    week: u32,
    week_start: WeekStart,
) -> Result<JalaliDate, CalendarError> {
    day_number_to_jalali(week_day_numbers(year, week, week_start)?.0)
}

/// Last day of a numbered week. The last week ends on the last day of Esfand.
pub fn end_of_week(
    year: i32,
    week: u32,
    week_start: WeekStart,
) -> Result<JalaliDate, CalendarError> {
    day_number_to_jalali(week_day_numbers(year, week, week_start)?.1)
}

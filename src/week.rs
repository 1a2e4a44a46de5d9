//! Week numbering over day numbers.
//!
//! Calendar-independent: a year is described by the day numbers of its first
//! day and of the first day of the following year. Weeks are aligned blocks
//! counted from the block containing the first day of the year, and every
//! day is numbered within its own year. The first and last weeks are clipped
//! to the year, so either may be shorter than seven days.

use crate::julian_day::weekday_of_julian_day;
use crate::options::WeekStart;

/// Aligned start of the block containing `year_start`.
pub(crate) fn week_one_start(year_start: i64, week_start: WeekStart) -> i64 {
    year_start - week_start.days_since(weekday_of_julian_day(year_start)) as i64
}

/// Week number of `day` within the year beginning on `year_start`.
pub(crate) fn week_of(day: i64, year_start: i64, week_start: WeekStart) -> u32 {
    ((day - week_one_start(year_start, week_start)).div_euclid(7) + 1) as u32
}

/// Number of weeks in a year, counting a trailing partial block.
pub(crate) fn weeks_in_year(year_start: i64, next_year_start: i64, week_start: WeekStart) -> u32 {
    week_of(next_year_start - 1, year_start, week_start)
}

/// First and last day of week `week`, clipped to the year.
pub(crate) fn week_days(
    year_start: i64,
    next_year_start: i64,
    week: u32,
    week_start: WeekStart,
) -> Option<(i64, i64)> {
    if week == 0 || week > weeks_in_year(year_start, next_year_start, week_start) {
        return None;
    }
    let aligned = week_one_start(year_start, week_start) + (week as i64 - 1) * 7;
    Some((aligned.max(year_start), (aligned + 6).min(next_year_start - 1)))
}

/// The first day on or after `day` that falls on `week_start`.
pub(crate) fn next_aligned(day: i64, week_start: WeekStart) -> i64 {
    let lead = (7 - week_start.days_since(weekday_of_julian_day(day))) % 7;
    day + lead as i64
}

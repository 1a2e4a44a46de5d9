//! Period boundaries and navigation.
//!
//! Tokens are read in `opts.date_format` and boundaries are written in the
//! requested output calendar, so a Jalali month token can yield its first day
//! as a Gregorian day token.

use chrono::NaiveDate;

use super::{to_day_format, Period, PeriodKind};
use crate::calendar::{day_number_to_naive, naive_to_day_number};
use crate::jalali::add_months;
use crate::options::{DateFormat, Options, WeekStart};
use crate::week;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Start,
    End,
}

fn month_range(calendar: DateFormat, year: i32, month: u32) -> Option<(i64, i64)> {
    let length = calendar.month_length(year, month);
    if length == 0 {
        return None;
    }
    let start = calendar.to_day_number(year, month, 1).ok()?;
    Some((start, start + length as i64 - 1))
}

/// First day of `year` and first day of the year after.
fn year_bounds(calendar: DateFormat, year: i32) -> Option<(i64, i64)> {
    let (first, _) = month_range(calendar, year, 1)?;
    let (_, last) = month_range(calendar, year, 12)?;
    Some((first, last + 1))
}

/// First and last day numbers of a period.
fn day_range(period: Period, calendar: DateFormat, week_start: WeekStart) -> Option<(i64, i64)> {
    match period {
        Period::Day { year, month, day } => {
            let n = calendar.to_day_number(year, month, day).ok()?;
            Some((n, n))
        }
        Period::Week { year, week } => {
            let (first, next) = year_bounds(calendar, year)?;
            week::week_days(first, next, week, week_start)
        }
        Period::Month { year, month } => month_range(calendar, year, month),
        Period::Season { year, season } => {
            if !(1..=4).contains(&season) {
                return None;
            }
            let (start, _) = month_range(calendar, year, season * 3 - 2)?;
            let (_, end) = month_range(calendar, year, season * 3)?;
            Some((start, end))
        }
        Period::Year { year } => {
            let (first, next) = year_bounds(calendar, year)?;
            Some((first, next - 1))
        }
    }
}

fn weeks_in(calendar: DateFormat, year: i32, week_start: WeekStart) -> Option<u32> {
    let (first, next) = year_bounds(calendar, year)?;
    Some(week::weeks_in_year(first, next, week_start))
}

/// Step a week `offset` weeks through the numbered weeks of consecutive
/// years, so the last week of a year is followed by week 1 of the next.
fn shift_week(
    year: i32,
    week: u32,
    offset: i32,
    calendar: DateFormat,
    week_start: WeekStart,
) -> Option<(i32, u32)> {
    let mut year = year;
    let mut week = week as i64 + offset as i64;
    while week < 1 {
        year = year.checked_sub(1)?;
        week += weeks_in(calendar, year, week_start)? as i64;
    }
    loop {
        let count = weeks_in(calendar, year, week_start)? as i64;
        if week <= count {
            return Some((year, week as u32));
        }
        week -= count;
        year = year.checked_add(1)?;
    }
}

/// The period of the given kind that contains day number `n`.
fn containing(
    n: i64,
    kind: PeriodKind,
    calendar: DateFormat,
    week_start: WeekStart,
) -> Option<Period> {
    let (year, month, day) = calendar.ymd_of_day_number(n).ok()?;
    Some(match kind {
        PeriodKind::Day => Period::Day { year, month, day },
        PeriodKind::Week => {
            let (first, _) = year_bounds(calendar, year)?;
            Period::Week {
                year,
                week: week::week_of(n, first, week_start),
            }
        }
        PeriodKind::Month => Period::Month { year, month },
        PeriodKind::Season => Period::Season {
            year,
            season: (month - 1) / 3 + 1,
        },
        PeriodKind::Year => Period::Year { year },
    })
}

/// Widen a decoded token to a period of `kind`.
///
/// A day token widens to anything; months widen to their season and year,
/// seasons and weeks to their year. Narrowing is not possible.
fn enclosing(
    period: Period,
    kind: PeriodKind,
    calendar: DateFormat,
    week_start: WeekStart,
) -> Option<Period> {
    if period.kind() == kind {
        return Some(period);
    }
    match (period, kind) {
        (Period::Day { .. }, _) => {
            let (n, _) = day_range(period, calendar, week_start)?;
            containing(n, kind, calendar, week_start)
        }
        (Period::Month { year, month }, PeriodKind::Season) => Some(Period::Season {
            year,
            season: (month - 1) / 3 + 1,
        }),
        (
            Period::Week { year, .. } | Period::Month { year, .. } | Period::Season { year, .. },
            PeriodKind::Year,
        ) => Some(Period::Year { year }),
        _ => None,
    }
}

fn boundary(
    token: &str,
    kind: PeriodKind,
    edge: Edge,
    output: DateFormat,
    opts: &Options,
) -> Option<String> {
    let period = Period::parse(token, &opts.separator)?;
    let target = enclosing(period, kind, opts.date_format, opts.week_start)?;
    let (start, end) = day_range(target, opts.date_format, opts.week_start)?;
    let n = match edge {
        Edge::Start => start,
        Edge::End => end,
    };
    let (year, month, day) = output.ymd_of_day_number(n).ok()?;
    Some(to_day_format(year, month, day, &opts.separator))
}

/// First day of the week of a day or week token, as a day token in `output`.
/// Week 1 starts on the first day of the year.
pub fn start_of_week(token: &str, output: DateFormat, opts: &Options) -> Option<String> {
    boundary(token, PeriodKind::Week, Edge::Start, output, opts)
}

/// Last day of the week of a day or week token. The last week of a year
/// ends on the last day of the year.
pub fn end_of_week(token: &str, output: DateFormat, opts: &Options) -> Option<String> {
    boundary(token, PeriodKind::Week, Edge::End, output, opts)
}

/// First day of the month of a day or month token, as a day token in `output`.
pub fn start_of_month(token: &str, output: DateFormat, opts: &Options) -> Option<String> {
    boundary(token, PeriodKind::Month, Edge::Start, output, opts)
}

/// Last day of the month of a day or month token.
pub fn end_of_month(token: &str, output: DateFormat, opts: &Options) -> Option<String> {
    boundary(token, PeriodKind::Month, Edge::End, output, opts)
}

/// First day of the season of a day, month or season token.
pub fn start_of_season(token: &str, output: DateFormat, opts: &Options) -> Option<String> {
    boundary(token, PeriodKind::Season, Edge::Start, output, opts)
}

/// Last day of the season of a day, month or season token.
pub fn end_of_season(token: &str, output: DateFormat, opts: &Options) -> Option<String> {
    boundary(token, PeriodKind::Season, Edge::End, output, opts)
}

/// First day of the year of any token.
pub fn start_of_year(token: &str, output: DateFormat, opts: &Options) -> Option<String> {
    boundary(token, PeriodKind::Year, Edge::Start, output, opts)
}

/// Last day of the year of any token.
pub fn end_of_year(token: &str, output: DateFormat, opts: &Options) -> Option<String> {
    boundary(token, PeriodKind::Year, Edge::End, output, opts)
}

/// The period of `kind` containing a civil date, in `opts.date_format`.
pub fn period_of_date(date: NaiveDate, kind: PeriodKind, opts: &Options) -> Option<Period> {
    containing(
        naive_to_day_number(date),
        kind,
        opts.date_format,
        opts.week_start,
    )
}

/// First and last civil dates covered by a token.
pub fn period_range(token: &str, opts: &Options) -> Option<(NaiveDate, NaiveDate)> {
    let period = Period::parse(token, &opts.separator)?;
    let (start, end) = day_range(period, opts.date_format, opts.week_start)?;
    Some((day_number_to_naive(start)?, day_number_to_naive(end)?))
}

/// The token `offset` periods after (or before, if negative) `token`,
/// keeping the token's shape.
pub fn shift_period(token: &str, offset: i32, opts: &Options) -> Option<String> {
    let calendar = opts.date_format;
    let week_start = opts.week_start;
    let period = Period::parse(token, &opts.separator)?;

    let shifted = match period {
        Period::Day { .. } => {
            let (n, _) = day_range(period, calendar, week_start)?;
            containing(n + offset as i64, PeriodKind::Day, calendar, week_start)?
        }
        Period::Week { year, week } => {
            day_range(period, calendar, week_start)?;
            let (year, week) = shift_week(year, week, offset, calendar, week_start)?;
            Period::Week { year, week }
        }
        Period::Month { year, month } => {
            let (year, month) = add_months(year, month, offset);
            Period::Month { year, month }
        }
        Period::Season { year, season } => {
            let index = year as i64 * 4 + (season as i64 - 1) + offset as i64;
            Period::Season {
                year: index.div_euclid(4) as i32,
                season: index.rem_euclid(4) as u32 + 1,
            }
        }
        Period::Year { year } => Period::Year {
            year: year.checked_add(offset)?,
        },
    };

    // Only hand out tokens that can be resolved again
    day_range(shifted, calendar, week_start)?;
    Some(shifted.to_token(&opts.separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_cannot_narrow() {
        let year = Period::Year { year: 1404 };
        assert_eq!(
            enclosing(year, PeriodKind::Month, DateFormat::Jalali, WeekStart::Saturday),
            None
        );
    }

    #[test]
    fn test_month_widens_to_season() {
        let month = Period::Month {
            year: 1404,
            month: 8,
        };
        assert_eq!(
            enclosing(month, PeriodKind::Season, DateFormat::Jalali, WeekStart::Saturday),
            Some(Period::Season {
                year: 1404,
                season: 3
            })
        );
    }

    #[test]
    fn test_shift_week_crosses_short_last_week() {
        let ws = WeekStart::Saturday;
        assert_eq!(weeks_in(DateFormat::Jalali, 1403, ws), Some(53));
        assert_eq!(shift_week(1404, 1, -1, DateFormat::Jalali, ws), Some((1403, 53)));
        assert_eq!(shift_week(1403, 53, 1, DateFormat::Jalali, ws), Some((1404, 1)));
        assert_eq!(shift_week(1404, 10, -115, DateFormat::Jalali, ws), Some((1402, 1)));
    }

    #[test]
    fn test_year_range_covers_all_days() {
        let (start, end) =
            day_range(Period::Year { year: 1403 }, DateFormat::Jalali, WeekStart::Saturday)
                .unwrap();
        assert_eq!(end - start + 1, 366);
    }
}

//! Period tokens ("dash" strings)
//!
//! A period token names a day, week, month, season or year:
//!
//! | Shape | Example |
//! |-------|---------|
//! | Day | `1404-01-09` |
//! | Week | `1404-W12` |
//! | Month | `1404-01` |
//! | Season | `1404-S2` |
//! | Year | `1404` |
//!
//! Month, day and week components are always two digits; the year is never
//! padded. Any string matches at most one shape. Decoding never fails loudly:
//! a malformed token yields `None`.
//!
//! A day token does not say which calendar it is written in, so conversions
//! take a [`DateFormat`] from the caller.

mod boundary;
mod patterns;

use std::fmt;

use chrono::NaiveDate;

use crate::options::{DateFormat, DEFAULT_SEPARATOR};

pub use boundary::{
    end_of_month, end_of_season, end_of_week, end_of_year, period_of_date, period_range,
    shift_period, start_of_month, start_of_season, start_of_week, start_of_year,
};

/// The shape of a period token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodKind {
    Day,
    Week,
    Month,
    Season,
    Year,
}

/// A decoded period token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Day { year: i32, month: u32, day: u32 },
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
    Season { year: i32, season: u32 },
    Year { year: i32 },
}

impl Period {
    /// Shape of this period.
    pub fn kind(&self) -> PeriodKind {
        match self {
            Period::Day { .. } => PeriodKind::Day,
            Period::Week { .. } => PeriodKind::Week,
            Period::Month { .. } => PeriodKind::Month,
            Period::Season { .. } => PeriodKind::Season,
            Period::Year { .. } => PeriodKind::Year,
        }
    }

    /// Year the period lies in.
    pub fn year(&self) -> i32 {
        match *self {
            Period::Day { year, .. }
            | Period::Week { year, .. }
            | Period::Month { year, .. }
            | Period::Season { year, .. }
            | Period::Year { year } => year,
        }
    }

    /// Decode a token, trying the shapes from most to least specific.
    pub fn parse(token: &str, separator: &str) -> Option<Period> {
        if let Some((year, month, day)) = extract_day_format_with(token, separator) {
            return Some(Period::Day { year, month, day });
        }
        if let Some((year, week)) = extract_week_format_with(token, separator) {
            return Some(Period::Week { year, week });
        }
        if let Some((year, month)) = extract_month_format_with(token, separator) {
            return Some(Period::Month { year, month });
        }
        if let Some((year, season)) = extract_season_format_with(token, separator) {
            return Some(Period::Season { year, season });
        }
        extract_year_format_with(token, separator).map(|year| Period::Year { year })
    }

    /// Encode as a token with the given separator.
    pub fn to_token(&self, separator: &str) -> String {
        match *self {
            Period::Day { year, month, day } => to_day_format(year, month, day, separator),
            Period::Week { year, week } => to_week_format(year, week, separator),
            Period::Month { year, month } => to_month_format(year, month, separator),
            Period::Season { year, season } => to_season_format(year, season, separator),
            Period::Year { year } => to_year_format(year),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token(DEFAULT_SEPARATOR))
    }
}

// ============================================================================
// Detection
// ============================================================================

/// Returns true if `token` has the day shape, `YYYY-MM-DD`.
pub fn is_day_format(token: &str) -> bool {
    is_day_format_with(token, DEFAULT_SEPARATOR)
}

/// Returns true if `token` has the week shape, `YYYY-Www`.
pub fn is_week_format(token: &str) -> bool {
    is_week_format_with(token, DEFAULT_SEPARATOR)
}

/// Returns true if `token` has the month shape, `YYYY-MM`.
pub fn is_month_format(token: &str) -> bool {
    is_month_format_with(token, DEFAULT_SEPARATOR)
}

/// Returns true if `token` has the season shape, `YYYY-Sn`.
pub fn is_season_format(token: &str) -> bool {
    is_season_format_with(token, DEFAULT_SEPARATOR)
}

/// Returns true if `token` is a bare year.
pub fn is_year_format(token: &str) -> bool {
    is_year_format_with(token, DEFAULT_SEPARATOR)
}

/// [`is_day_format`] with a custom separator. An empty separator never matches.
pub fn is_day_format_with(token: &str, separator: &str) -> bool {
    patterns::patterns_for(separator).is_some_and(|p| p.day.is_match(token))
}

/// [`is_week_format`] with a custom separator.
pub fn is_week_format_with(token: &str, separator: &str) -> bool {
    patterns::patterns_for(separator).is_some_and(|p| p.week.is_match(token))
}

/// [`is_month_format`] with a custom separator.
pub fn is_month_format_with(token: &str, separator: &str) -> bool {
    patterns::patterns_for(separator).is_some_and(|p| p.month.is_match(token))
}

/// [`is_season_format`] with a custom separator.
pub fn is_season_format_with(token: &str, separator: &str) -> bool {
    patterns::patterns_for(separator).is_some_and(|p| p.season.is_match(token))
}

/// [`is_year_format`] with a custom separator.
pub fn is_year_format_with(token: &str, separator: &str) -> bool {
    patterns::patterns_for(separator).is_some_and(|p| p.year.is_match(token))
}

/// Shape of a token, checked Day, Week, Month, Season, then Year.
///
/// This only looks at the shape; see [`Period::parse`] for range checks.
pub fn detect_period(token: &str, separator: &str) -> Option<PeriodKind> {
    let p = patterns::patterns_for(separator)?;
    if p.day.is_match(token) {
        Some(PeriodKind::Day)
    } else if p.week.is_match(token) {
        Some(PeriodKind::Week)
    } else if p.month.is_match(token) {
        Some(PeriodKind::Month)
    } else if p.season.is_match(token) {
        Some(PeriodKind::Season)
    } else if p.year.is_match(token) {
        Some(PeriodKind::Year)
    } else {
        None
    }
}

// ============================================================================
// Extraction
// ============================================================================

fn capture_numbers<const N: usize>(re: &regex::Regex, token: &str) -> Option<[u32; N]> {
    let caps = re.captures(token)?;
    let mut out = [0u32; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = caps.get(i + 1)?.as_str().parse().ok()?;
    }
    Some(out)
}

/// `(year, month, day)` of a day token. Month and day are range checked
/// (1-12, 1-31); calendar validity is checked on conversion.
pub fn extract_day_format(token: &str) -> Option<(i32, u32, u32)> {
    extract_day_format_with(token, DEFAULT_SEPARATOR)
}

/// [`extract_day_format`] with a custom separator.
pub fn extract_day_format_with(token: &str, separator: &str) -> Option<(i32, u32, u32)> {
    let p = patterns::patterns_for(separator)?;
    let [year, month, day] = capture_numbers::<3>(&p.day, token)?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year as i32, month, day))
}

/// `(year, week)` of a week token, with week in 1-54. Whether the year has
/// that many weeks is checked on conversion.
pub fn extract_week_format(token: &str) -> Option<(i32, u32)> {
    extract_week_format_with(token, DEFAULT_SEPARATOR)
}

/// [`extract_week_format`] with a custom separator.
pub fn extract_week_format_with(token: &str, separator: &str) -> Option<(i32, u32)> {
    let p = patterns::patterns_for(separator)?;
    let [year, week] = capture_numbers::<2>(&p.week, token)?;
    if !(1..=54).contains(&week) {
        return None;
    }
    Some((year as i32, week))
}

/// `(year, month)` of a month token, with month in 1-12.
pub fn extract_month_format(token: &str) -> Option<(i32, u32)> {
    extract_month_format_with(token, DEFAULT_SEPARATOR)
}

/// [`extract_month_format`] with a custom separator.
pub fn extract_month_format_with(token: &str, separator: &str) -> Option<(i32, u32)> {
    let p = patterns::patterns_for(separator)?;
    let [year, month] = capture_numbers::<2>(&p.month, token)?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year as i32, month))
}

/// `(year, season)` of a season token, with season in 1-4.
pub fn extract_season_format(token: &str) -> Option<(i32, u32)> {
    extract_season_format_with(token, DEFAULT_SEPARATOR)
}

/// [`extract_season_format`] with a custom separator.
pub fn extract_season_format_with(token: &str, separator: &str) -> Option<(i32, u32)> {
    let p = patterns::patterns_for(separator)?;
    let [year, season] = capture_numbers::<2>(&p.season, token)?;
    Some((year as i32, season))
}

/// Year of a bare year token.
pub fn extract_year_format(token: &str) -> Option<i32> {
    extract_year_format_with(token, DEFAULT_SEPARATOR)
}

/// [`extract_year_format`] with a custom separator.
pub fn extract_year_format_with(token: &str, separator: &str) -> Option<i32> {
    let p = patterns::patterns_for(separator)?;
    let [year] = capture_numbers::<1>(&p.year, token)?;
    Some(year as i32)
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode a day token, `1404-01-09`.
pub fn to_day_format(year: i32, month: u32, day: u32, separator: &str) -> String {
    format!("{year}{separator}{month:02}{separator}{day:02}")
}

/// Encode a week token, `1404-W05`.
pub fn to_week_format(year: i32, week: u32, separator: &str) -> String {
    format!("{year}{separator}W{week:02}")
}

/// Encode a month token, `1404-12`.
pub fn to_month_format(year: i32, month: u32, separator: &str) -> String {
    format!("{year}{separator}{month:02}")
}

/// Encode a season token, `1404-S3`.
pub fn to_season_format(year: i32, season: u32, separator: &str) -> String {
    format!("{year}{separator}S{season}")
}

/// Encode a year token. The year is not padded.
pub fn to_year_format(year: i32) -> String {
    year.to_string()
}

// ============================================================================
// Cross-calendar conversion
// ============================================================================

/// Civil date of a day token written in `format`.
pub fn dash_to_date(token: &str, format: DateFormat) -> Option<NaiveDate> {
    dash_to_date_with(token, format, DEFAULT_SEPARATOR)
}

/// [`dash_to_date`] with a custom separator.
pub fn dash_to_date_with(token: &str, format: DateFormat, separator: &str) -> Option<NaiveDate> {
    let (year, month, day) = extract_day_format_with(token, separator)?;
    format.to_naive(year, month, day).ok()
}

/// Day token of a civil date, written in `format`.
///
/// Returns `None` if the date cannot be expressed in `format` (a Jalali
/// year outside the supported range).
pub fn date_to_dash(date: NaiveDate, format: DateFormat, separator: &str) -> Option<String> {
    let (year, month, day) = format.ymd_of(date).ok()?;
    Some(to_day_format(year, month, day, separator))
}

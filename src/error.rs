//! Error types for calendar conversion and configuration.

use thiserror::Error;

/// Errors raised when user-supplied date components cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid Jalali date: {year}-{month:02}-{day:02}")]
    InvalidJalaliDate { year: i32, month: u32, day: u32 },

    #[error("invalid Gregorian date: {year}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: u32, day: u32 },

    #[error("invalid Hijri date: {year}-{month:02}-{day:02}")]
    InvalidHijriDate { year: i32, month: u32, day: u32 },

    #[error("Jalali year {year} is outside the supported range")]
    JalaliYearOutOfRange { year: i32 },

    #[error("week {week} does not exist in year {year}")]
    InvalidWeek { year: i32, week: u32 },
}

/// Errors raised when parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown week start '{0}' (expected sat, sun or mon)")]
    UnknownWeekStart(String),

    #[error("unknown locale '{0}' (expected fa or en)")]
    UnknownLocale(String),

    #[error("unknown date format '{0}' (expected jalali, gregorian or hijri)")]
    UnknownDateFormat(String),

    #[error("token separator must not be empty")]
    EmptySeparator,
}

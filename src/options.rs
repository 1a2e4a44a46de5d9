//! Conversion options and configuration.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::ConfigError;
use crate::locale::Locale;

/// The weekday that opens a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeekStart {
    /// Iranian convention
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "sat"))]
    Saturday,
    #[cfg_attr(feature = "serde", serde(rename = "sun"))]
    Sunday,
    #[cfg_attr(feature = "serde", serde(rename = "mon"))]
    Monday,
}

impl WeekStart {
    /// Returns the chrono weekday this week start corresponds to.
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Saturday => Weekday::Sat,
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Number of days from the week start to `day`, in `0..7`.
    pub fn days_since(&self, day: Weekday) -> u32 {
        let start = self.weekday().num_days_from_sunday();
        (day.num_days_from_sunday() + 7 - start) % 7
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WeekStart::Saturday => "sat",
            WeekStart::Sunday => "sun",
            WeekStart::Monday => "mon",
        })
    }
}

impl FromStr for WeekStart {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sat" | "saturday" => Ok(WeekStart::Saturday),
            "sun" | "sunday" => Ok(WeekStart::Sunday),
            "mon" | "monday" => Ok(WeekStart::Monday),
            _ => Err(ConfigError::UnknownWeekStart(s.to_string())),
        }
    }
}

/// The calendar a date or period token is expressed in.
///
/// A bare `YYYY-MM-DD` token is ambiguous between calendars, so every
/// cross-calendar operation takes this discriminator explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DateFormat {
    #[default]
    Jalali,
    Gregorian,
    Hijri,
}

impl DateFormat {
    pub const ALL: [DateFormat; 3] = [DateFormat::Jalali, DateFormat::Gregorian, DateFormat::Hijri];
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateFormat::Jalali => "jalali",
            DateFormat::Gregorian => "gregorian",
            DateFormat::Hijri => "hijri",
        })
    }
}

impl FromStr for DateFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jalali" | "persian" | "shamsi" => Ok(DateFormat::Jalali),
            "gregorian" | "miladi" => Ok(DateFormat::Gregorian),
            "hijri" | "islamic" | "ghamari" => Ok(DateFormat::Hijri),
            _ => Err(ConfigError::UnknownDateFormat(s.to_string())),
        }
    }
}

pub const DEFAULT_SEPARATOR: &str = "-";

/// Options shared by the period codec and the formatting helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// First day of the week for week numbering and week boundaries.
    pub week_start: WeekStart,
    /// Separator placed between token components.
    pub separator: String,
    /// Locale for names and digits.
    pub locale: Locale,
    /// Calendar that tokens are read and written in.
    pub date_format: DateFormat,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            week_start: WeekStart::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            locale: Locale::default(),
            date_format: DateFormat::default(),
        }
    }
}

impl Options {
    /// Set the first day of the week.
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Replace the token separator. An empty separator would make tokens
    /// like `14040101` ambiguous, so it is rejected.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Result<Self, ConfigError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        self.separator = separator;
        Ok(self)
    }

    /// Set the display locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the calendar tokens are read in.
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }
}

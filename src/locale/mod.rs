//! Calendar names and digit rendering for the supported locales.

mod builtin;
mod digits;

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::date::JalaliDate;
use crate::error::ConfigError;
use crate::options::DateFormat;

pub use builtin::NameTable;
pub use digits::{from_persian_digits, to_arabic_digits, to_persian_digits};

/// Display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// Persian, with Persian digits
    #[default]
    Fa,
    /// English, with ASCII digits
    En,
}

impl Locale {
    /// Built-in name table of this locale.
    pub fn names(&self) -> &'static NameTable {
        match self {
            Locale::Fa => &builtin::FA,
            Locale::En => &builtin::EN,
        }
    }

    /// Render ASCII digits in this locale's numerals.
    pub fn digits(&self, text: &str) -> String {
        match self {
            Locale::Fa => to_persian_digits(text),
            Locale::En => text.to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::Fa => "fa",
            Locale::En => "en",
        })
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fa" | "fa-ir" | "persian" => Ok(Locale::Fa),
            "en" | "en-us" | "english" => Ok(Locale::En),
            _ => Err(ConfigError::UnknownLocale(s.to_string())),
        }
    }
}

/// Name of a month (1-12) in the given calendar.
pub fn month_name(calendar: DateFormat, month: u32, locale: Locale) -> Option<&'static str> {
    let names = locale.names();
    let table = match calendar {
        DateFormat::Jalali => &names.jalali_months,
        DateFormat::Gregorian => &names.gregorian_months,
        DateFormat::Hijri => &names.hijri_months,
    };
    table.get(month.checked_sub(1)? as usize).copied()
}

/// Localized name of a weekday.
pub fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    locale.names().weekdays[weekday.num_days_from_sunday() as usize]
}

/// Name of a season (1-4).
pub fn season_name(season: u32, locale: Locale) -> Option<&'static str> {
    locale
        .names()
        .seasons
        .get(season.checked_sub(1)? as usize)
        .copied()
}

/// Localized name of a calendar.
pub fn calendar_name(calendar: DateFormat, locale: Locale) -> &'static str {
    let index = match calendar {
        DateFormat::Jalali => 0,
        DateFormat::Gregorian => 1,
        DateFormat::Hijri => 2,
    };
    locale.names().calendars[index]
}

/// Long form of a Jalali date, e.g. `۲۰ اسفند ۱۴۰۴` or `20 Esfand 1404`.
///
/// Returns `None` if the month is out of range.
pub fn format_jalali_date(date: JalaliDate, locale: Locale) -> Option<String> {
    let month = month_name(DateFormat::Jalali, date.month, locale)?;
    Some(format!(
        "{} {} {}",
        locale.digits(&date.day.to_string()),
        month,
        locale.digits(&date.year.to_string())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(DateFormat::Jalali, 1, Locale::Fa), Some("فروردین"));
        assert_eq!(month_name(DateFormat::Jalali, 12, Locale::En), Some("Esfand"));
        assert_eq!(month_name(DateFormat::Hijri, 0, Locale::En), None);
        assert_eq!(month_name(DateFormat::Gregorian, 13, Locale::En), None);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(Weekday::Sat, Locale::Fa), "شنبه");
        assert_eq!(weekday_name(Weekday::Fri, Locale::En), "Friday");
    }

    #[test]
    fn test_season_name() {
        assert_eq!(season_name(1, Locale::Fa), Some("بهار"));
        assert_eq!(season_name(4, Locale::En), Some("Winter"));
        assert_eq!(season_name(5, Locale::En), None);
    }
}

//! gahshomar - Jalali, Gregorian and Hijri calendar engine
//!
//! This crate converts dates between the Jalali (solar Hijri), Gregorian and
//! lunar Hijri calendars, encodes calendar periods as compact tokens
//! (`1404-01-09`, `1404-W12`, `1404-S2`, ...), derives week, month, season
//! and year boundaries, and looks up calendar events and holidays.
//!
//! Everything here is pure computation; nothing performs I/O.

pub mod calendar;
pub mod cursor;
pub mod dash;
pub mod date;
pub mod error;
pub mod events;
pub mod gregorian;
pub mod hijri;
pub mod jalali;
pub mod julian_day;
pub mod locale;
pub mod options;
pub mod today;

mod week;

pub use cursor::MonthCursor;
pub use dash::{Period, PeriodKind};
pub use date::{GregorianDate, HijriDate, JalaliDate};
pub use error::{CalendarError, ConfigError};
pub use events::{events_for_date, format_events_as_text, is_holiday, Event, EventBase, EventVisibility};
pub use hijri::{date_to_hijri, gregorian_to_hijri, hijri_to_gregorian, hijri_to_jalali, jalali_to_hijri};
pub use jalali::{gregorian_to_jalali, is_leap_jalali_year, jalali_to_gregorian, YearWeek};
pub use locale::Locale;
pub use options::{DateFormat, Options, WeekStart};
pub use today::today;

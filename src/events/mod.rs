//! Calendar events and holidays
//!
//! Three static tables (Jalali, Gregorian, Hijri) are indexed once by
//! (month, day) on first use and shared read-only afterwards. A lookup
//! converts the civil date into each calendar and collects the matching
//! records, gated per source by [`EventVisibility`].

mod data;

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::date::{GregorianDate, JalaliDate};
use crate::hijri::date_to_hijri;
use crate::locale::Locale;

/// The source an event comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventBase {
    /// Iranian official calendar (Jalali)
    #[cfg_attr(feature = "serde", serde(rename = "IR Government"))]
    IrGovernment,
    /// Ancient Iranian festivals (Jalali)
    #[cfg_attr(feature = "serde", serde(rename = "IR Ancient"))]
    IrAncient,
    /// Islamic occasions observed in Iran (Hijri)
    #[cfg_attr(feature = "serde", serde(rename = "IR Islam"))]
    IrIslam,
    /// International observances (Gregorian)
    #[cfg_attr(feature = "serde", serde(rename = "Global"))]
    Global,
}

impl fmt::Display for EventBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventBase::IrGovernment => "IR Government",
            EventBase::IrAncient => "IR Ancient",
            EventBase::IrIslam => "IR Islam",
            EventBase::Global => "Global",
        })
    }
}

/// A static event keyed by (month, day) in its base's calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord {
    pub month: u32,
    pub day: u32,
    pub base: EventBase,
    pub title: &'static str,
    pub holiday: bool,
}

/// An event found for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Event {
    pub base: EventBase,
    pub title: &'static str,
    pub holiday: bool,
}

impl From<&EventRecord> for Event {
    fn from(record: &EventRecord) -> Self {
        Event {
            base: record.base,
            title: record.title,
            holiday: record.holiday,
        }
    }
}

/// Which event sources to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EventVisibility {
    pub ir_government: bool,
    pub ir_ancient: bool,
    pub ir_islam: bool,
    pub global: bool,
}

impl EventVisibility {
    /// Every source visible.
    pub const fn all() -> Self {
        EventVisibility {
            ir_government: true,
            ir_ancient: true,
            ir_islam: true,
            global: true,
        }
    }

    /// Every source hidden.
    pub const fn none() -> Self {
        EventVisibility {
            ir_government: false,
            ir_ancient: false,
            ir_islam: false,
            global: false,
        }
    }

    /// Returns true if events from `base` are displayed.
    pub fn shows(&self, base: EventBase) -> bool {
        match base {
            EventBase::IrGovernment => self.ir_government,
            EventBase::IrAncient => self.ir_ancient,
            EventBase::IrIslam => self.ir_islam,
            EventBase::Global => self.global,
        }
    }
}

impl Default for EventVisibility {
    fn default() -> Self {
        Self::all()
    }
}

/// Month -> day -> records.
struct EventTable {
    days: [[Vec<&'static EventRecord>; 31]; 12],
}

impl EventTable {
    fn build(name: &str, records: &'static [EventRecord]) -> Self {
        let mut days: [[Vec<&'static EventRecord>; 31]; 12] =
            std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()));

        for record in records {
            let slot = (record.month as usize)
                .checked_sub(1)
                .zip((record.day as usize).checked_sub(1))
                .and_then(|(m, d)| days.get_mut(m)?.get_mut(d));
            match slot {
                Some(slot) => slot.push(record),
                None => debug!(
                    table = name,
                    month = record.month,
                    day = record.day,
                    "skipping event with out-of-range date"
                ),
            }
        }

        EventTable { days }
    }

    fn lookup(&self, month: u32, day: u32) -> &[&'static EventRecord] {
        (month as usize)
            .checked_sub(1)
            .zip((day as usize).checked_sub(1))
            .and_then(|(m, d)| self.days.get(m)?.get(d))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

static JALALI_TABLE: Lazy<EventTable> =
    Lazy::new(|| EventTable::build("jalali", data::JALALI_EVENTS));
static GREGORIAN_TABLE: Lazy<EventTable> =
    Lazy::new(|| EventTable::build("gregorian", data::GREGORIAN_EVENTS));
static HIJRI_TABLE: Lazy<EventTable> =
    Lazy::new(|| EventTable::build("hijri", data::HIJRI_EVENTS));

/// Events falling on a civil date, in the order Jalali, Gregorian, Hijri.
pub fn events_for_date(date: NaiveDate, visibility: EventVisibility) -> Vec<Event> {
    let mut events = Vec::new();
    let mut collect = |records: &[&'static EventRecord]| {
        events.extend(
            records
                .iter()
                .filter(|r| visibility.shows(r.base))
                .map(|r| Event::from(*r)),
        );
    };

    // Dates beyond the Jalali leap table simply have no Jalali events
    if let Ok(jalali) = JalaliDate::from_naive(date) {
        collect(JALALI_TABLE.lookup(jalali.month, jalali.day));
    }

    let gregorian = GregorianDate::from(date);
    collect(GREGORIAN_TABLE.lookup(gregorian.month, gregorian.day));

    let hijri = date_to_hijri(date);
    collect(HIJRI_TABLE.lookup(hijri.month, hijri.day));

    events
}

/// Whether any source marks the date as a holiday. Independent of which
/// sources a caller chooses to display.
pub fn is_holiday(date: NaiveDate) -> bool {
    events_for_date(date, EventVisibility::all())
        .iter()
        .any(|e| e.holiday)
}

/// Events for every date in `start..=end` that has at least one.
pub fn events_in_range(
    start: NaiveDate,
    end: NaiveDate,
    visibility: EventVisibility,
) -> Vec<(NaiveDate, Vec<Event>)> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| (d, events_for_date(d, visibility)))
        .filter(|(_, events)| !events.is_empty())
        .collect()
}

/// Render events as a Persian bullet list.
///
/// ```
/// use gahshomar::events::{format_events_as_text, Event, EventBase};
///
/// let events = [Event { base: EventBase::IrGovernment, title: "روز درختکاری", holiday: false }];
/// assert_eq!(format_events_as_text(&events), "- روز درختکاری");
/// assert_eq!(format_events_as_text(&[]), "رویدادی وجود ندارد");
/// ```
pub fn format_events_as_text(events: &[Event]) -> String {
    format_events_as_text_in(events, Locale::Fa)
}

/// Render events as a bullet list using the locale's holiday marker and
/// empty-list sentinel.
pub fn format_events_as_text_in(events: &[Event], locale: Locale) -> String {
    let names = locale.names();
    if events.is_empty() {
        return names.no_events.to_string();
    }

    events
        .iter()
        .map(|e| {
            if e.holiday {
                format!("- {} ({})", e.title, names.holiday_marker)
            } else {
                format!("- {}", e.title)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_no_skipped_records() {
        for (table, records) in [
            (&*JALALI_TABLE, data::JALALI_EVENTS),
            (&*GREGORIAN_TABLE, data::GREGORIAN_EVENTS),
            (&*HIJRI_TABLE, data::HIJRI_EVENTS),
        ] {
            let indexed: usize = table.days.iter().flatten().map(Vec::len).sum();
            assert_eq!(indexed, records.len());
        }
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert!(JALALI_TABLE.lookup(0, 1).is_empty());
        assert!(JALALI_TABLE.lookup(13, 1).is_empty());
        assert!(JALALI_TABLE.lookup(1, 32).is_empty());
    }

    #[test]
    fn test_holiday_marker() {
        let events = [Event {
            base: EventBase::IrIslam,
            title: "عید سعید فطر",
            holiday: true,
        }];
        assert_eq!(format_events_as_text(&events), "- عید سعید فطر (تعطیل)");
        assert_eq!(
            format_events_as_text_in(&events, Locale::En),
            "- عید سعید فطر (holiday)"
        );
    }
}

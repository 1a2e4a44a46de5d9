//! Confirmed Hijri month lengths
//!
//! Month lengths published from local moon sighting for a contiguous run of
//! Hijri years, anchored by the Gregorian date of 1 Muharram of the first
//! year. Within these years, dates are derived by walking the months from the
//! anchor instead of trusting the tabular approximation.
//!
//! A year may list fewer than 12 months while the rest of it has not been
//! observed yet. The missing months are extrapolated by alternating 29 and 30
//! days from the last listed month (or from a 30-day Muharram if none are
//! listed).

use tracing::trace;

use crate::date::{GregorianDate, HijriDate};
use crate::hijri::tabular_to_julian_day;
use crate::julian_day::{gregorian_to_julian_day, julian_day_to_gregorian};

/// First Hijri year with confirmed month lengths.
const FIRST_CONFIRMED_YEAR: i32 = 1445;

/// Julian Day Number of 1 Muharram [`FIRST_CONFIRMED_YEAR`] (2023-07-19).
const CONFIRMED_ANCHOR_JDN: i64 = gregorian_to_julian_day(2023, 7, 19);

/// Confirmed month lengths, one row per year starting at
/// [`FIRST_CONFIRMED_YEAR`].
const CONFIRMED_MONTHS: &[&[u32]] = &[
    // 1445
    &[29, 30, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30],
    // 1446
    &[30, 29, 30, 29, 30, 29, 30, 30, 29, 29, 30, 29],
    // 1447, observed through Ramadan
    &[30, 29, 30, 29, 30, 30, 30, 29, 30],
];

fn confirmed_row(year: i32) -> Option<&'static [u32]> {
    let index = usize::try_from(year.checked_sub(FIRST_CONFIRMED_YEAR)?).ok()?;
    CONFIRMED_MONTHS.get(index).copied()
}

/// Returns true if `year` has confirmed month data.
pub fn is_supported_hijri_year(year: i32) -> bool {
    confirmed_row(year).is_some()
}

/// Confirmed (or extrapolated) length of a month in a supported year.
///
/// Returns `None` for unsupported years and months outside 1-12.
pub fn confirmed_month_length(year: i32, month: u32) -> Option<u32> {
    let row = confirmed_row(year)?;
    if !(1..=12).contains(&month) {
        return None;
    }

    let index = (month - 1) as usize;
    if let Some(&length) = row.get(index) {
        return Some(length);
    }

    // Alternate from the last listed month
    let (mut length, from) = match row.last() {
        Some(&last) => (last, row.len()),
        None => (29, 0),
    };
    for _ in from..=index {
        length = 59 - length;
    }
    Some(length)
}

/// Julian Day Number of the first day of a month in a supported year.
fn month_start_julian_day(year: i32, month: u32) -> Option<i64> {
    confirmed_row(year)?;
    if !(1..=12).contains(&month) {
        return None;
    }

    let mut jdn = CONFIRMED_ANCHOR_JDN;
    for y in FIRST_CONFIRMED_YEAR..=year {
        let last_month = if y == year { month - 1 } else { 12 };
        for m in 1..=last_month {
            jdn += confirmed_month_length(y, m)? as i64;
        }
    }
    Some(jdn)
}

/// Julian Day Number of a date in a supported year. Does not check `day`.
pub(crate) fn confirmed_julian_day(year: i32, month: u32, day: u32) -> Option<i64> {
    Some(month_start_julian_day(year, month)? + day as i64 - 1)
}

/// Walk the confirmed months from the anchor to `jdn`.
///
/// Returns `None` when `jdn` lies before the anchor or past the last
/// supported year.
fn walk_confirmed(jdn: i64) -> Option<HijriDate> {
    let mut remaining = jdn - CONFIRMED_ANCHOR_JDN;
    if remaining < 0 {
        return None;
    }

    let mut year = FIRST_CONFIRMED_YEAR;
    let mut month = 1;
    loop {
        let length = confirmed_month_length(year, month)? as i64;
        if remaining < length {
            return Some(HijriDate {
                year,
                month,
                day: remaining as u32 + 1,
            });
        }
        remaining -= length;
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
}

/// Replace an approximate Hijri date with the confirmed one.
///
/// If the approximate year has no confirmed data, or the date falls outside
/// the confirmed span, the approximation is returned unchanged.
pub fn adjust_hijri_to_confirmed(approx: HijriDate) -> HijriDate {
    if !is_supported_hijri_year(approx.year) {
        trace!(year = approx.year, "no confirmed Hijri data, using tabular approximation");
        return approx;
    }

    let jdn = tabular_to_julian_day(approx.year, approx.month, approx.day);
    match walk_confirmed(jdn) {
        Some(confirmed) => confirmed,
        None => {
            trace!(%approx, "date outside confirmed Hijri span, using tabular approximation");
            approx
        }
    }
}

/// Replace an approximate Gregorian date for `hy-hm-hd` with the confirmed
/// one: the first day of `(hy, hm)` plus `hd - 1` days.
pub fn adjust_gregorian_to_confirmed(
    hy: i32,
    hm: u32,
    hd: u32,
    approx: GregorianDate,
) -> GregorianDate {
    match confirmed_julian_day(hy, hm, hd) {
        Some(jdn) => julian_day_to_gregorian(jdn),
        None => {
            trace!(year = hy, "no confirmed Hijri data, using tabular approximation");
            approx
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_years() {
        assert!(!is_supported_hijri_year(1444));
        assert!(is_supported_hijri_year(1445));
        assert!(is_supported_hijri_year(1447));
        assert!(!is_supported_hijri_year(1448));
    }

    #[test]
    fn test_extrapolated_months_alternate() {
        // 1447 lists Ramadan (30), later months alternate
        assert_eq!(confirmed_month_length(1447, 9), Some(30));
        assert_eq!(confirmed_month_length(1447, 10), Some(29));
        assert_eq!(confirmed_month_length(1447, 11), Some(30));
        assert_eq!(confirmed_month_length(1447, 12), Some(29));
        assert_eq!(confirmed_month_length(1447, 13), None);
        assert_eq!(confirmed_month_length(1448, 1), None);
    }

    #[test]
    fn test_year_starts_follow_anchor() {
        assert_eq!(
            month_start_julian_day(1445, 1),
            Some(gregorian_to_julian_day(2023, 7, 19))
        );
        assert_eq!(
            month_start_julian_day(1446, 1),
            Some(gregorian_to_julian_day(2024, 7, 8))
        );
        assert_eq!(
            month_start_julian_day(1447, 1),
            Some(gregorian_to_julian_day(2025, 6, 27))
        );
    }

    #[test]
    fn test_walk_before_anchor() {
        assert_eq!(walk_confirmed(CONFIRMED_ANCHOR_JDN - 1), None);
        let first = walk_confirmed(CONFIRMED_ANCHOR_JDN);
        assert_eq!(first, Some(HijriDate { year: 1445, month: 1, day: 1 }));
    }
}

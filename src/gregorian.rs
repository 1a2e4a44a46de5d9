//! Proleptic Gregorian calendar rules and day numbers.
//!
//! Unlike [`crate::julian_day`], these day numbers never switch to the Julian
//! calendar: they count proleptic Gregorian days and agree with the Julian
//! Day Number from 1582-10-15 onward. The Jalali arithmetic is defined on
//! top of them.

use crate::date::GregorianDate;

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month/year, or 0 for a month
/// outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Returns true if the month is 1-12 and the day exists in it.
pub fn is_valid_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month)
}

/// Day number of a proleptic Gregorian date.
///
/// Integer division truncates toward zero here; the constants keep every
/// intermediate positive for the years the Jalali core supports.
pub(crate) fn gregorian_to_day_number(year: i32, month: u32, day: u32) -> i64 {
    let gy = year as i64;
    let gm = month as i64;
    let gd = day as i64;

    let d = (gy + (gm - 8) / 6 + 100_100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34_840_408;
    d - (gy + 100_100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}

/// Inverse of [`gregorian_to_day_number`].
pub(crate) fn day_number_to_gregorian(day_number: i64) -> GregorianDate {
    let mut j = 4 * day_number + 139_361_631;
    j += (4 * day_number + 183_187_720) / 146_097 * 3 / 4 * 4 - 3908;
    let i = (j % 1461) / 4 * 5 + 308;

    let day = (i % 153) / 5 + 1;
    let month = (i / 153) % 12 + 1;
    let year = j / 1461 - 100_100 + (8 - month) / 6;

    GregorianDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_lengths_match_day_numbers() {
        // Both ends of the Jalali range plus the century rules
        for year in [560, 1582, 1700, 1900, 2000, 2023, 2024, 2100, 3799] {
            for month in 1..=12u32 {
                let first = gregorian_to_day_number(year, month, 1);
                let next = if month == 12 {
                    gregorian_to_day_number(year + 1, 1, 1)
                } else {
                    gregorian_to_day_number(year, month + 1, 1)
                };
                let length = days_in_month(year, month) as i64;
                assert_eq!(next - first, length, "{}-{:02}", year, month);
            }
            let start = gregorian_to_day_number(year, 1, 1);
            let days = gregorian_to_day_number(year + 1, 1, 1) - start;
            assert_eq!(days == 366, is_leap_year(year), "{}", year);
        }
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_end_of_february() {
        let march = |y| day_number_to_gregorian(gregorian_to_day_number(y, 2, 28) + 1);
        assert_eq!(march(1900).month, 3);
        assert_eq!(march(2100).month, 3);
        assert_eq!((march(2000).month, march(2000).day), (2, 29));
        assert!(is_valid_gregorian_date(2000, 2, 29));
        assert!(!is_valid_gregorian_date(1900, 2, 29));
        assert!(!is_valid_gregorian_date(2024, 4, 31));
    }

    #[test]
    fn test_day_number_matches_julian_day() {
        assert_eq!(gregorian_to_day_number(2000, 1, 1), 2_451_545);
        for &(y, m, d) in &[(1600, 3, 1), (1900, 2, 28), (2024, 2, 29), (2026, 1, 9)] {
            let n = gregorian_to_day_number(y, m, d);
            assert_eq!(n, crate::julian_day::gregorian_to_julian_day(y, m, d));
            let back = day_number_to_gregorian(n);
            assert_eq!((back.year, back.month, back.day), (y, m, d));
        }
    }
}

//! Julian Day Number bridge
//!
//! Converts civil dates to and from a continuous day count. The Hijri
//! approximation is routed through this bridge.
//!
//! ## Calendar reform
//!
//! Dates before 1582-10-15 are read as Julian calendar dates (the correction
//! term is dropped), so 1582-10-04 is immediately followed by 1582-10-15.
//! The inverse applies the same cutover at JDN 2299161.
//!
//! Both directions are total: out-of-range input yields a mathematically
//! derived, possibly nonsensical result instead of an error.

use chrono::Weekday;

use crate::date::GregorianDate;

/// First Julian Day Number of the Gregorian calendar (1582-10-15).
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// Convert a civil date to a Julian Day Number.
///
/// This is the Meeus algorithm in integer form: `365.25` and `30.6001`
/// become the exact fractions `1461/4` and `306001/10000`.
///
/// # Arguments
/// * `year` - Civil year (Julian calendar before the 1582 reform)
/// * `month` - Month (1-12)
/// * `day` - Day of month
pub const fn gregorian_to_julian_day(year: i32, month: u32, day: u32) -> i64 {
    let mut y = year as i64;
    let mut m = month as i64;

    if m < 3 {
        y -= 1;
        m += 12;
    }

    let b = if is_before_reform(year, month, day) {
        0
    } else {
        let a = y.div_euclid(100);
        2 - a + a.div_euclid(4)
    };

    (1461 * (y + 4716)).div_euclid(4) + (306_001 * (m + 1)).div_euclid(10_000) + day as i64 + b
        - 1524
}

const fn is_before_reform(year: i32, month: u32, day: u32) -> bool {
    year < 1582 || (year == 1582 && (month < 10 || (month == 10 && day < 15)))
}

/// Convert a Julian Day Number back to a civil date.
pub fn julian_day_to_gregorian(jdn: i64) -> GregorianDate {
    let a = if jdn < GREGORIAN_REFORM_JDN {
        jdn
    } else {
        let alpha = (4 * jdn - 7_468_865).div_euclid(146_097);
        jdn + 1 + alpha - alpha.div_euclid(4)
    };

    let b = a + 1524;
    let c = (100 * b - 12_210).div_euclid(36_525);
    let d = (1461 * c).div_euclid(4);
    let e = (10_000 * (b - d)).div_euclid(306_001);

    let day = b - d - (306_001 * e).div_euclid(10_000);
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    GregorianDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekday of a Julian Day Number (JDN 0 was a Monday).
pub fn weekday_of_julian_day(jdn: i64) -> Weekday {
    WEEKDAYS[jdn.rem_euclid(7) as usize]
}

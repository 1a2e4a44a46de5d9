//! Calendar dispatch over [`DateFormat`].
//!
//! The period codec works on day numbers (proleptic Gregorian Julian Day
//! Numbers); this module moves (year, month, day) triples of any supported
//! calendar in and out of that representation.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::gregorian::{self, day_number_to_gregorian, gregorian_to_day_number};
use crate::options::DateFormat;
use crate::{hijri, jalali};

/// Day number of 0001-01-01 minus chrono's day count for it.
const CE_OFFSET: i64 = 1_721_425;

pub(crate) fn naive_to_day_number(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + CE_OFFSET
}

pub(crate) fn day_number_to_naive(day_number: i64) -> Option<NaiveDate> {
    let days = i32::try_from(day_number - CE_OFFSET).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}

impl DateFormat {
    /// Number of days in a month of this calendar, or 0 for a month outside 1-12.
    pub fn month_length(self, year: i32, month: u32) -> u32 {
        match self {
            DateFormat::Jalali => jalali::jalali_month_length(year, month),
            DateFormat::Gregorian => gregorian::days_in_month(year, month),
            DateFormat::Hijri => {
                if (1..=12).contains(&month) {
                    hijri::hijri_month_length(year, month)
                } else {
                    0
                }
            }
        }
    }

    /// Returns true if the date exists in this calendar.
    pub fn is_valid_date(self, year: i32, month: u32, day: u32) -> bool {
        match self {
            DateFormat::Jalali => jalali::is_valid_jalali_date(year, month, day),
            DateFormat::Gregorian => gregorian::is_valid_gregorian_date(year, month, day),
            DateFormat::Hijri => hijri::is_valid_hijri_date(year, month, day),
        }
    }

    /// Day number of a date in this calendar.
    pub(crate) fn to_day_number(
        self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<i64, CalendarError> {
        match self {
            DateFormat::Jalali => jalali::jalali_to_day_number(year, month, day),
            DateFormat::Gregorian => {
                if !gregorian::is_valid_gregorian_date(year, month, day) {
                    return Err(CalendarError::InvalidGregorianDate { year, month, day });
                }
                Ok(gregorian_to_day_number(year, month, day))
            }
            DateFormat::Hijri => hijri::hijri_to_julian_day(year, month, day),
        }
    }

    /// (year, month, day) in this calendar of a day number.
    pub(crate) fn ymd_of_day_number(
        self,
        day_number: i64,
    ) -> Result<(i32, u32, u32), CalendarError> {
        match self {
            DateFormat::Jalali => {
                let j = jalali::day_number_to_jalali(day_number)?;
                Ok((j.year, j.month, j.day))
            }
            DateFormat::Gregorian => {
                let g = day_number_to_gregorian(day_number);
                Ok((g.year, g.month, g.day))
            }
            DateFormat::Hijri => {
                let h = hijri::julian_day_to_hijri(day_number);
                Ok((h.year, h.month, h.day))
            }
        }
    }

    /// Civil date of a date in this calendar.
    pub fn to_naive(self, year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
        let n = self.to_day_number(year, month, day)?;
        day_number_to_naive(n).ok_or(CalendarError::InvalidGregorianDate { year, month, day })
    }

    /// (year, month, day) of a civil date in this calendar.
    pub fn ymd_of(self, date: NaiveDate) -> Result<(i32, u32, u32), CalendarError> {
        match self {
            DateFormat::Gregorian => Ok((date.year(), date.month(), date.day())),
            _ => self.ymd_of_day_number(naive_to_day_number(date)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_day_numbers() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(naive_to_day_number(date), 2_451_545);
        assert_eq!(day_number_to_naive(2_451_545), Some(date));
    }

    #[test]
    fn test_dispatch_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 11).unwrap();
        for format in DateFormat::ALL {
            let (y, m, d) = format.ymd_of(date).unwrap();
            assert_eq!(format.to_naive(y, m, d).unwrap(), date, "{}", format);
        }
    }

    #[test]
    fn test_hijri_dispatch_before_reform() {
        // Civil dates stay proleptic on both sides of the 1582 reform
        let mut date = NaiveDate::from_ymd_opt(1582, 9, 20).unwrap();
        let end = NaiveDate::from_ymd_opt(1582, 10, 25).unwrap();
        while date < end {
            let (y, m, d) = DateFormat::Hijri.ymd_of(date).unwrap();
            assert_eq!(DateFormat::Hijri.to_naive(y, m, d).unwrap(), date);
            date = date.succ_opt().unwrap();
        }
        assert_eq!(
            DateFormat::Hijri.ymd_of(NaiveDate::from_ymd_opt(622, 7, 19).unwrap()),
            Ok((1, 1, 1))
        );
    }

    #[test]
    fn test_month_length_dispatch() {
        assert_eq!(DateFormat::Jalali.month_length(1403, 12), 30);
        assert_eq!(DateFormat::Gregorian.month_length(2024, 2), 29);
        assert_eq!(DateFormat::Hijri.month_length(1447, 7), 30);
        assert_eq!(DateFormat::Hijri.month_length(1447, 0), 0);
    }
}

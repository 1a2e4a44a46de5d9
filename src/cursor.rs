//! Month navigation cursor.
//!
//! Holds the Jalali (year, month) a view is showing. The cursor only changes
//! through [`MonthCursor::set`] and [`MonthCursor::advance`]; all calendar
//! math is delegated to [`crate::jalali`].

use crate::date::JalaliDate;
use crate::error::CalendarError;
use crate::jalali::{self, add_months};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Cursor on `month` of `year`, validated.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !jalali::is_valid_jalali_date(year, month, 1) {
            return Err(CalendarError::InvalidJalaliDate {
                year,
                month,
                day: 1,
            });
        }
        Ok(MonthCursor { year, month })
    }

    /// Cursor on the month containing `date`.
    pub fn containing(date: JalaliDate) -> Self {
        MonthCursor {
            year: date.year,
            month: date.month,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Jump to another month. Leaves the cursor untouched on error.
    pub fn set(&mut self, year: i32, month: u32) -> Result<(), CalendarError> {
        *self = MonthCursor::new(year, month)?;
        Ok(())
    }

    /// Move by `offset` months, rolling over years in either direction.
    pub fn advance(&mut self, offset: i32) -> Result<(), CalendarError> {
        let (year, month) = add_months(self.year, self.month, offset);
        self.set(year, month)
    }

    /// Day 1 of the current month.
    pub fn first_day(&self) -> JalaliDate {
        JalaliDate {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }

    /// Last day of the current month, Esfand 30 in leap years.
    pub fn last_day(&self) -> JalaliDate {
        JalaliDate {
            year: self.year,
            month: self.month,
            day: jalali::jalali_month_length(self.year, self.month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_across_years() {
        let mut cursor = MonthCursor::new(1403, 11).unwrap();
        cursor.advance(3).unwrap();
        assert_eq!((cursor.year(), cursor.month()), (1404, 2));
        cursor.advance(-14).unwrap();
        assert_eq!((cursor.year(), cursor.month()), (1402, 12));
    }

    #[test]
    fn test_last_day_follows_leap_year() {
        assert_eq!(MonthCursor::new(1403, 12).unwrap().last_day().day, 30);
        assert_eq!(MonthCursor::new(1404, 12).unwrap().last_day().day, 29);
        assert_eq!(MonthCursor::new(1404, 7).unwrap().last_day().day, 30);
    }

    #[test]
    fn test_set_rejects_invalid_month() {
        let mut cursor = MonthCursor::new(1404, 1).unwrap();
        assert!(cursor.set(1404, 13).is_err());
        assert_eq!(cursor, MonthCursor::new(1404, 1).unwrap());
    }
}

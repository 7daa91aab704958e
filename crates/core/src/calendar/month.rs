use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{CalendarError, Result};

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month, or `None` if the month is not 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// The facts about a month needed to lay it out as a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    /// Day of the week the 1st falls on.
    pub first_weekday: Weekday,
    pub days_in_month: u32,
}

impl MonthLayout {
    /// Computes the layout for a month.
    ///
    /// Fails with [`CalendarError::InvalidMonth`] when `month` is not 1..=12 or the
    /// year is outside the range chrono can represent.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::InvalidMonth { year, month })?;
        let days_in_month =
            days_in_month(year, month).ok_or(CalendarError::InvalidMonth { year, month })?;

        Ok(Self {
            year,
            month,
            first_weekday: first.weekday(),
            days_in_month,
        })
    }

    /// Day number shown in the leftmost cell of the first week row.
    ///
    /// Zero or negative when the 1st does not fall on `week_start`; those cells render blank.
    pub fn first_day_counter(&self, week_start: Weekday) -> i64 {
        let start = i64::from(week_start.num_days_from_sunday());
        let first = i64::from(self.first_weekday.num_days_from_sunday());

        if start == first {
            1
        } else if start > first {
            start - 7
        } else {
            1 - (first - start)
        }
    }

    /// Number of week rows needed when weeks start on `week_start`.
    pub fn week_count(&self, week_start: Weekday) -> usize {
        let last = i64::from(self.days_in_month);
        let mut counter = self.first_day_counter(week_start);
        let mut weeks = 0;
        while counter <= last {
            weeks += 1;
            counter += 7;
        }
        weeks
    }
}

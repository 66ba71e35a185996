//! Calendar month value used to address a grid.
//!
//! Months are 0-based (`month0`, January = 0), matching
//! [`chrono::Datelike::month0`].

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::utils::date::{first_day_of_month, last_day_of_month};

/// Rejected grid request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("month index {0} is out of range (expected 0 to 11)")]
    InvalidMonth(u32),
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}

/// A (year, month) pair whose first and last days are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayedMonth {
    first: NaiveDate,
    last: NaiveDate,
}

impl DisplayedMonth {
    pub fn new(year: i32, month0: u32) -> Result<Self, ValidationError> {
        if month0 > 11 {
            return Err(ValidationError::InvalidMonth(month0));
        }
        let first =
            first_day_of_month(year, month0).ok_or(ValidationError::YearOutOfRange(year))?;
        let last = last_day_of_month(first).ok_or(ValidationError::YearOutOfRange(year))?;
        Ok(Self { first, last })
    }

    /// The month a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        // December of the last representable year has no "next month" to step back from.
        let last = last_day_of_month(first).unwrap_or(NaiveDate::MAX);
        Self { first, last }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    /// 1-based month number, for display.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    pub fn days_in_month(&self) -> u32 {
        self.last.day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// Shift by a number of months, carrying the year. `None` past chrono's range.
    pub fn shift(&self, delta: i32) -> Option<Self> {
        let total_months = i64::from(self.year()) * 12 + i64::from(self.month0()) + i64::from(delta);
        let year = i32::try_from(total_months.div_euclid(12)).ok()?;
        let month0 = total_months.rem_euclid(12) as u32;
        Self::new(year, month0).ok()
    }

    /// Following month; stays put at the end of the calendar.
    pub fn next(&self) -> Self {
        self.shift(1).unwrap_or(*self)
    }

    /// Preceding month; stays put at the start of the calendar.
    pub fn previous(&self) -> Self {
        self.shift(-1).unwrap_or(*self)
    }

    /// Header text such as "January 2024".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

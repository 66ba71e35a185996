//! A single day in a month grid.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One cell of a month grid, classified when the grid is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Outside the date bounds the grid was generated with.
    pub disabled: bool,
    /// Matches the clock's date at generation time.
    pub is_today: bool,
    /// Belongs to the requested month rather than the padding around it.
    pub is_same_month: bool,
}

impl DayCell {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

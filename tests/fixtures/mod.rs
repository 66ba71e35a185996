// Test fixtures - reusable test data
// Provides consistent dates and bounds across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_datepicker::models::bounds::DateBounds;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Returns Jan 1, 2024 (a Monday)
    pub fn jan_1_2024() -> NaiveDate {
        ymd(2024, 1, 1)
    }

    /// Returns Jan 1, 2025 (a Wednesday)
    pub fn jan_1_2025() -> NaiveDate {
        ymd(2025, 1, 1)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }

    /// Returns Sep 1, 2024 (a month starting on Sunday)
    pub fn sunday_first_2024() -> NaiveDate {
        ymd(2024, 9, 1)
    }
}

/// Sample bounds for testing
pub mod bounds {
    use super::*;

    /// Jan 10 to Jan 20, 2024 inclusive
    pub fn mid_january_2024() -> DateBounds {
        DateBounds::between(dates::ymd(2024, 1, 10), dates::ymd(2024, 1, 20))
    }

    /// Min after max: nothing is selectable
    pub fn reversed() -> DateBounds {
        DateBounds::between(dates::ymd(2024, 1, 20), dates::ymd(2024, 1, 10))
    }
}

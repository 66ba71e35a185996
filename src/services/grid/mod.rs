//! Calendar grid generation.
//!
//! Produces one month's visible cells, padded with the tail of the previous
//! month and the head of the next so the grid covers whole Sunday-to-Saturday
//! weeks, and buckets them by weekday.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::bounds::DateBounds;
use crate::models::day_cell::DayCell;
use crate::models::grid::WeekdayBuckets;
use crate::models::month::{DisplayedMonth, ValidationError};
use crate::services::selection::is_eligible;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::date::weekday_index;

/// Days of the previous month shown before the 1st.
pub fn leading_padding(first_day: NaiveDate) -> u32 {
    weekday_index(first_day.weekday()) as u32
}

/// Days of the next month shown after the last day.
pub fn trailing_padding(last_day: NaiveDate) -> u32 {
    6 - weekday_index(last_day.weekday()) as u32
}

/// Build the grid for `month0` (0-based) of `year`.
///
/// `today` marks the `is_today` cell. Fails only for a month index above 11
/// or a month too close to the ends of the representable calendar.
pub fn generate_month_grid(
    year: i32,
    month0: u32,
    bounds: &DateBounds,
    today: NaiveDate,
) -> Result<WeekdayBuckets, ValidationError> {
    let month = DisplayedMonth::new(year, month0)?;
    generate_for_month(month, bounds, today)
}

/// Build the grid for an already validated month.
pub fn generate_for_month(
    month: DisplayedMonth,
    bounds: &DateBounds,
    today: NaiveDate,
) -> Result<WeekdayBuckets, ValidationError> {
    let out_of_range = ValidationError::YearOutOfRange(month.year());
    let first = month.first_day();
    let last = month.last_day();

    let start = first
        .checked_sub_days(Days::new(u64::from(leading_padding(first))))
        .ok_or(out_of_range)?;
    let end = last
        .checked_add_days(Days::new(u64::from(trailing_padding(last))))
        .ok_or(out_of_range)?;

    let mut buckets = WeekdayBuckets::new();
    for date in start.iter_days().take_while(|date| *date <= end) {
        buckets.push(DayCell {
            date,
            disabled: !is_eligible(date, bounds),
            is_today: date == today,
            is_same_month: month.contains(date),
        });
    }

    log::debug!(
        "Generated grid for {}-{:02}: {} cells, {} weeks",
        month.year(),
        month.month(),
        buckets.len(),
        buckets.week_count()
    );
    Ok(buckets)
}

/// Generates grids against a clock read once per grid.
#[derive(Debug, Clone, Default)]
pub struct GridService<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> GridService<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn month_grid(
        &self,
        year: i32,
        month0: u32,
        bounds: &DateBounds,
    ) -> Result<WeekdayBuckets, ValidationError> {
        generate_month_grid(year, month0, bounds, self.clock.today())
    }

    pub fn grid_for(
        &self,
        month: DisplayedMonth,
        bounds: &DateBounds,
    ) -> Result<WeekdayBuckets, ValidationError> {
        generate_for_month(month, bounds, self.clock.today())
    }
}

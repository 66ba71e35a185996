// Date utility functions
// Calendar-day normalisation and Sunday-first weekday helpers

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};

/// Weekdays in column order. The first day of the week is always Sunday.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Short column labels, indexed like [`WEEKDAYS`].
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Column index of a weekday (Sunday = 0 .. Saturday = 6).
pub fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

pub fn weekday_label(weekday: Weekday) -> &'static str {
    WEEKDAY_LABELS[weekday_index(weekday)]
}

/// Strip the time of day, leaving the calendar day in the value's own timezone.
pub fn calendar_day<Tz: TimeZone>(date: &DateTime<Tz>) -> NaiveDate {
    date.date_naive()
}

pub fn is_same_day<Tz: TimeZone>(date1: &DateTime<Tz>, date2: &DateTime<Tz>) -> bool {
    calendar_day(date1) == calendar_day(date2)
}

/// First day of the month, `month0` being 0-based. `None` when the month is
/// outside chrono's representable range or `month0 > 11`.
pub fn first_day_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, 1)
}

/// Last day of the month containing `date`, found by stepping back one day
/// from the first of the following month.
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year().checked_add(1)?, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|d| d.pred_opt())
}

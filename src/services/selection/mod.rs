//! Eligibility, selection and display emphasis for grid cells.
//!
//! These are read-only evaluations over a generated grid; nothing here
//! mutates a cell.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::bounds::DateBounds;
use crate::models::day_cell::DayCell;

/// Whether `date` may be picked under `bounds`.
pub fn is_eligible(date: NaiveDate, bounds: &DateBounds) -> bool {
    bounds.contains(date)
}

/// Whether `date` should be shown as the selection.
///
/// An out-of-bounds selection is never highlighted, even on its own cell.
pub fn is_selected(date: NaiveDate, selected: NaiveDate, bounds: &DateBounds) -> bool {
    is_eligible(selected, bounds) && date == selected
}

/// Visual treatment of a cell, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emphasis {
    Selected,
    TodayInRange,
    TodayDisabled,
    Disabled,
    OutOfMonth,
    Normal,
}

impl Emphasis {
    /// Disabled styling applies to a disabled today as well.
    pub fn is_disabled_styled(&self) -> bool {
        matches!(self, Self::Disabled | Self::TodayDisabled)
    }

    pub fn is_today(&self) -> bool {
        matches!(self, Self::TodayInRange | Self::TodayDisabled)
    }
}

/// Classify a cell: selected, then disabled, then today, then out-of-month.
pub fn classify_emphasis(
    cell: &DayCell,
    selected: Option<NaiveDate>,
    bounds: &DateBounds,
) -> Emphasis {
    if selected.is_some_and(|selected| is_selected(cell.date, selected, bounds)) {
        Emphasis::Selected
    } else if cell.disabled {
        if cell.is_today {
            Emphasis::TodayDisabled
        } else {
            Emphasis::Disabled
        }
    } else if cell.is_today {
        Emphasis::TodayInRange
    } else if !cell.is_same_month {
        Emphasis::OutOfMonth
    } else {
        Emphasis::Normal
    }
}

/// Only enabled days of the displayed month accept a press.
pub fn is_pressable(cell: &DayCell) -> bool {
    !cell.disabled && cell.is_same_month
}

/// Day-of-month text for a cell; blank for padding days when they are hidden.
pub fn day_label(cell: &DayCell, hide_diff_month_days: bool) -> String {
    if hide_diff_month_days && !cell.is_same_month {
        String::new()
    } else {
        cell.day().to_string()
    }
}

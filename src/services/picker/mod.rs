//! Picker state: the displayed month, the current selection and the bounds.
//!
//! Holds what a rendering layer keeps between frames and regenerates the
//! grid from it on demand. Presses are filtered through the same rules the
//! grid cells carry, so a disabled or padding day never becomes the selection.

use chrono::NaiveDate;

use crate::models::bounds::DateBounds;
use crate::models::day_cell::DayCell;
use crate::models::grid::WeekdayBuckets;
use crate::models::month::{DisplayedMonth, ValidationError};
use crate::models::settings::PickerSettings;
use crate::services::grid::GridService;
use crate::services::selection::{classify_emphasis, day_label, is_eligible, Emphasis};
use crate::utils::clock::Clock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    displayed: DisplayedMonth,
    selected: NaiveDate,
    settings: PickerSettings,
}

impl DatePicker {
    /// Start on the month containing `selected`.
    pub fn new(selected: NaiveDate, settings: PickerSettings) -> Self {
        Self {
            displayed: DisplayedMonth::containing(selected),
            selected,
            settings,
        }
    }

    pub fn displayed(&self) -> DisplayedMonth {
        self.displayed
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn bounds(&self) -> DateBounds {
        self.settings.bounds()
    }

    /// Replace the bounds. The selection is kept even if it falls outside;
    /// it simply stops being highlighted.
    pub fn set_bounds(&mut self, bounds: DateBounds) {
        if !is_eligible(self.selected, &bounds) {
            log::debug!("Selection {} is outside the new bounds", self.selected);
        }
        self.settings = self.settings.clone().with_bounds(bounds);
    }

    pub fn show_month(&mut self, month: DisplayedMonth) {
        self.displayed = month;
    }

    pub fn next_month(&mut self) {
        self.displayed = self.displayed.next();
    }

    pub fn previous_month(&mut self) {
        self.displayed = self.displayed.previous();
    }

    /// Jump the display to the month containing the clock's today.
    pub fn go_to_today(&mut self, clock: &impl Clock) {
        self.displayed = DisplayedMonth::containing(clock.today());
    }

    pub fn show_header(&self) -> bool {
        !self.settings.hide_header
    }

    /// Generate the grid for the displayed month.
    pub fn grid<C: Clock>(&self, service: &GridService<C>) -> Result<WeekdayBuckets, ValidationError> {
        service.grid_for(self.displayed, &self.bounds())
    }

    /// Handle a press on `date`. Returns the new selection, or `None` when the
    /// day is disabled or not part of the displayed month.
    pub fn press(&mut self, date: NaiveDate) -> Option<NaiveDate> {
        if !self.displayed.contains(date) || !is_eligible(date, &self.bounds()) {
            log::debug!("Ignoring press on {}", date);
            return None;
        }
        self.selected = date;
        Some(date)
    }

    pub fn emphasis_for(&self, cell: &DayCell) -> Emphasis {
        classify_emphasis(cell, Some(self.selected), &self.bounds())
    }

    pub fn label_for(&self, cell: &DayCell) -> String {
        day_label(cell, self.settings.hide_diff_month_days)
    }
}

//! Weekday-bucketed month grid.
//!
//! Cells are stored by column (one column per weekday, Sunday first) rather
//! than by week row. Within a column cells are in chronological order. Row
//! views are derived on demand for consumers that lay out by week.

use chrono::Weekday;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::day_cell::DayCell;
use crate::utils::date::{weekday_index, weekday_label, WEEKDAYS};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeekdayBuckets {
    columns: [Vec<DayCell>; 7],
}

impl WeekdayBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell to its weekday's column. Cells must arrive in chronological order.
    pub(crate) fn push(&mut self, cell: DayCell) {
        self.columns[weekday_index(cell.weekday())].push(cell);
    }

    /// Cells in one weekday column.
    pub fn column(&self, weekday: Weekday) -> &[DayCell] {
        &self.columns[weekday_index(weekday)]
    }

    /// Columns in Sunday-first order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[DayCell])> {
        WEEKDAYS
            .iter()
            .zip(self.columns.iter())
            .map(|(weekday, cells)| (*weekday, cells.as_slice()))
    }

    /// Total number of cells across all columns.
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Number of complete Sunday-to-Saturday rows.
    pub fn week_count(&self) -> usize {
        self.columns.iter().map(Vec::len).min().unwrap_or(0)
    }

    /// Row view: one array per week, Sunday first.
    pub fn weeks(&self) -> Vec<[DayCell; 7]> {
        (0..self.week_count())
            .filter_map(|row| {
                let week: Vec<DayCell> = self
                    .columns
                    .iter()
                    .filter_map(|column| column.get(row).copied())
                    .collect();
                week.try_into().ok()
            })
            .collect()
    }

    /// Every cell in chronological order.
    pub fn cells(&self) -> Vec<DayCell> {
        self.weeks().into_iter().flatten().collect()
    }

    /// Padding days shown before the 1st of the month.
    pub fn leading_padding(&self) -> usize {
        self.cells()
            .iter()
            .take_while(|cell| !cell.is_same_month)
            .count()
    }

    /// Padding days shown after the last day of the month.
    pub fn trailing_padding(&self) -> usize {
        self.cells()
            .iter()
            .rev()
            .take_while(|cell| !cell.is_same_month)
            .count()
    }

    /// Days belonging to the requested month.
    pub fn same_month_count(&self) -> usize {
        self.columns
            .iter()
            .flatten()
            .filter(|cell| cell.is_same_month)
            .count()
    }

    /// The cell flagged as today, if today is on the grid.
    pub fn today(&self) -> Option<&DayCell> {
        self.columns.iter().flatten().find(|cell| cell.is_today)
    }
}

impl Serialize for WeekdayBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WEEKDAYS.len()))?;
        for (weekday, cells) in self.iter() {
            map.serialize_entry(weekday_label(weekday), cells)?;
        }
        map.end()
    }
}

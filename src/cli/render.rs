//! Plain-text rendering of a month grid for the terminal.

use std::fmt::Write;

use rust_datepicker::models::grid::WeekdayBuckets;
use rust_datepicker::services::picker::DatePicker;
use rust_datepicker::services::selection::Emphasis;
use rust_datepicker::utils::date::WEEKDAY_LABELS;

const CELL_WIDTH: usize = 5;
const LEGEND: &str = "[ ] selected  < > today  - unavailable  . other month";

pub fn render_month(picker: &DatePicker, grid: &WeekdayBuckets) -> String {
    let width = CELL_WIDTH * WEEKDAY_LABELS.len();
    let mut out = String::new();

    if picker.show_header() {
        let title = format!("{:^width$}", picker.displayed().title(), width = width);
        let _ = writeln!(out, "{}", title.trim_end());
    }

    let header: String = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{:>4} ", label))
        .collect();
    let _ = writeln!(out, "{}", header.trim_end());

    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| render_cell(picker.emphasis_for(cell), &picker.label_for(cell)))
            .collect();
        let _ = writeln!(out, "{}", row.trim_end());
    }

    out.push_str(LEGEND);
    out
}

fn render_cell(emphasis: Emphasis, label: &str) -> String {
    if label.is_empty() {
        return " ".repeat(CELL_WIDTH);
    }
    match emphasis {
        Emphasis::Selected => format!(" [{:>2}]", label),
        Emphasis::TodayInRange => format!(" <{:>2}>", label),
        Emphasis::TodayDisabled | Emphasis::Disabled => format!("  {:>2}-", label),
        Emphasis::OutOfMonth => format!("  {:>2}.", label),
        Emphasis::Normal => format!("  {:>2} ", label),
    }
}

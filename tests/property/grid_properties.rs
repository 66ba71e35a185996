// Property-based tests for grid generation
// Checks the grid invariants over random months, bounds and "today" values

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;
use rust_datepicker::models::bounds::DateBounds;
use rust_datepicker::services::grid::generate_month_grid;
use rust_datepicker::services::selection::{classify_emphasis, Emphasis};
use rust_datepicker::utils::date::weekday_index;

fn days_in_month(year: i32, month0: u32) -> usize {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
    let next = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1).unwrap()
    };
    (next - first).num_days() as usize
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2100i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// Property: every day of the month appears once, and the grid is whole weeks
    #[test]
    fn prop_grid_covers_month_in_whole_weeks(
        year in 1600..2400i32,
        month0 in 0..12u32,
    ) {
        let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let grid = generate_month_grid(year, month0, &DateBounds::UNBOUNDED, today).unwrap();

        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert_eq!(grid.same_month_count(), days_in_month(year, month0));

        let mut in_month: Vec<u32> = grid
            .cells()
            .iter()
            .filter(|c| c.is_same_month)
            .map(|c| c.date.day())
            .collect();
        in_month.sort_unstable();
        in_month.dedup();
        prop_assert_eq!(in_month.len(), days_in_month(year, month0));
    }

    /// Property: each bucket only holds its own weekday, in chronological order
    #[test]
    fn prop_buckets_match_weekday(
        year in 1600..2400i32,
        month0 in 0..12u32,
    ) {
        let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let grid = generate_month_grid(year, month0, &DateBounds::UNBOUNDED, today).unwrap();
        for (weekday, cells) in grid.iter() {
            prop_assert!(cells.iter().all(|c| c.date.weekday() == weekday));
            prop_assert!(cells.windows(2).all(|w| w[1].date - w[0].date == chrono::Duration::days(7)));
        }
    }

    /// Property: padding equals the weekday index of the 1st and 6 minus that of the last day
    #[test]
    fn prop_padding_is_closed_form(
        year in 1600..2400i32,
        month0 in 0..12u32,
    ) {
        let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let grid = generate_month_grid(year, month0, &DateBounds::UNBOUNDED, today).unwrap();
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
        let last = first
            .checked_add_days(Days::new(days_in_month(year, month0) as u64 - 1))
            .unwrap();

        prop_assert_eq!(grid.leading_padding(), weekday_index(first.weekday()));
        prop_assert_eq!(grid.trailing_padding(), 6 - weekday_index(last.weekday()));
    }

    /// Property: at most one cell is today, and only when today lies on the grid
    #[test]
    fn prop_today_flagged_at_most_once(
        year in 1990..2030i32,
        month0 in 0..12u32,
        today in arb_date(),
    ) {
        let grid = generate_month_grid(year, month0, &DateBounds::UNBOUNDED, today).unwrap();
        let cells = grid.cells();
        let flagged = cells.iter().filter(|c| c.is_today).count();
        let on_grid = cells.first().unwrap().date <= today && today <= cells.last().unwrap().date;
        prop_assert_eq!(flagged, usize::from(on_grid));
    }

    /// Property: disabled cells are exactly those outside the bounds, for every combination
    #[test]
    fn prop_disabled_matches_bounds(
        year in 1990..2030i32,
        month0 in 0..12u32,
        min in proptest::option::of(arb_date()),
        max in proptest::option::of(arb_date()),
    ) {
        let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let bounds = DateBounds::new(min, max);
        let grid = generate_month_grid(year, month0, &bounds, today).unwrap();
        for cell in grid.cells() {
            let below = min.is_some_and(|min| cell.date < min);
            let above = max.is_some_and(|max| cell.date > max);
            prop_assert_eq!(cell.disabled, below || above);
        }
    }

    /// Property: a selection outside the bounds is never shown as selected
    #[test]
    fn prop_selection_requires_eligible_date(
        year in 1990..2030i32,
        month0 in 0..12u32,
        selected in arb_date(),
        min in proptest::option::of(arb_date()),
        max in proptest::option::of(arb_date()),
    ) {
        let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let bounds = DateBounds::new(min, max);
        let grid = generate_month_grid(year, month0, &bounds, today).unwrap();
        let selected_cells = grid
            .cells()
            .iter()
            .filter(|c| classify_emphasis(c, Some(selected), &bounds) == Emphasis::Selected)
            .count();
        let expected = grid.cells().iter().any(|c| c.date == selected) && bounds.contains(selected);
        prop_assert_eq!(selected_cells, usize::from(expected));
    }

    /// Property: months outside 0..=11 are always rejected
    #[test]
    fn prop_invalid_month_rejected(
        year in 1600..2400i32,
        month0 in 12..u32::MAX,
    ) {
        let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        prop_assert!(generate_month_grid(year, month0, &DateBounds::UNBOUNDED, today).is_err());
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_days_in_month_helper() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2024, 11), 31);
        assert_eq!(days_in_month(2024, 3), 30);
    }
}

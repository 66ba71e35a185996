// Rust Date Picker Library
// Calendar grid generation and selection rules for date-picker widgets

pub mod models;
pub mod services;
pub mod utils;

pub use models::bounds::DateBounds;
pub use models::day_cell::DayCell;
pub use models::grid::WeekdayBuckets;
pub use models::month::{DisplayedMonth, ValidationError};
pub use services::grid::{generate_month_grid, GridService};
pub use services::selection::{classify_emphasis, is_eligible, is_selected, Emphasis};

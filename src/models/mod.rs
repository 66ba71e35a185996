// Module exports for models

pub mod bounds;
pub mod day_cell;
pub mod grid;
pub mod month;
pub mod settings;

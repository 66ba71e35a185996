//! Inclusive, independently optional date bounds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Earliest and latest selectable days. Either side may be absent; both are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<NaiveDate>,
}

impl DateBounds {
    /// No bounds: every day is eligible.
    pub const UNBOUNDED: Self = Self {
        min_date: None,
        max_date: None,
    };

    pub fn new(min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> Self {
        Self { min_date, max_date }
    }

    pub fn between(min_date: NaiveDate, max_date: NaiveDate) -> Self {
        Self::new(Some(min_date), Some(max_date))
    }

    pub fn at_least(min_date: NaiveDate) -> Self {
        Self::new(Some(min_date), None)
    }

    pub fn at_most(max_date: NaiveDate) -> Self {
        Self::new(None, Some(max_date))
    }

    /// Whether `date` lies within the bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.min_date, self.max_date) {
            (None, None) => true,
            (None, Some(max)) => date <= max,
            (Some(min), None) => date >= min,
            (Some(min), Some(max)) => min <= date && date <= max,
        }
    }

    /// True when `min_date` is after `max_date`, which excludes every day.
    pub fn is_reversed(&self) -> bool {
        matches!((self.min_date, self.max_date), (Some(min), Some(max)) if min > max)
    }
}

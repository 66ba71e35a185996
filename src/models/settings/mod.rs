// Settings module
// Presentation flags and default bounds for the picker

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::bounds::DateBounds;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Blank out the labels of padding days from neighbouring months.
    pub hide_diff_month_days: bool,
    /// Hide the month title and navigation header.
    pub hide_header: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<NaiveDate>,
}

impl PickerSettings {
    pub fn bounds(&self) -> DateBounds {
        DateBounds::new(self.min_date, self.max_date)
    }

    pub fn with_bounds(mut self, bounds: DateBounds) -> Self {
        self.min_date = bounds.min_date;
        self.max_date = bounds.max_date;
        self
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

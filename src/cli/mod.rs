mod render;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use rust_datepicker::models::bounds::DateBounds;
use rust_datepicker::models::grid::WeekdayBuckets;
use rust_datepicker::models::month::DisplayedMonth;
use rust_datepicker::models::settings::PickerSettings;
use rust_datepicker::services::grid::GridService;
use rust_datepicker::services::picker::DatePicker;
use rust_datepicker::services::settings::SettingsService;
use rust_datepicker::utils::clock::{Clock, FixedClock, SystemClock};

#[derive(Parser, Debug)]
#[command(name = "rust-datepicker")]
#[command(about = "Print a month as a date-picker grid")]
#[command(version)]
pub struct Cli {
    /// Year to show (defaults to the selected date's year)
    pub year: Option<i32>,

    /// Month to show, 1-12 (defaults to the selected date's month)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Earliest selectable day (YYYY-MM-DD)
    #[arg(long)]
    pub min: Option<NaiveDate>,

    /// Latest selectable day (YYYY-MM-DD)
    #[arg(long)]
    pub max: Option<NaiveDate>,

    /// Currently selected day (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub selected: Option<NaiveDate>,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Blank out days from neighbouring months
    #[arg(long)]
    pub hide_diff_month_days: bool,

    /// Omit the month title
    #[arg(long)]
    pub hide_header: bool,

    /// Print the weekday columns as JSON
    #[arg(long)]
    pub json: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// JSON view of one displayed month.
#[derive(Serialize)]
struct MonthReport<'a> {
    title: String,
    year: i32,
    month: u32,
    selected: NaiveDate,
    bounds: DateBounds,
    hide_header: bool,
    hide_diff_month_days: bool,
    weekdays: &'a WeekdayBuckets,
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Self::parse();
        let output = cli.execute()?;
        println!("{}", output);
        Ok(())
    }

    fn execute(&self) -> Result<String> {
        let settings = self.load_settings()?;
        let today = self.today.unwrap_or_else(|| SystemClock.today());
        let service = GridService::new(FixedClock(today));

        let mut picker = DatePicker::new(self.selected.unwrap_or(today), settings);
        if let Some(year) = self.year {
            let month0 = self
                .month
                .map_or(picker.displayed().month0(), |month| month - 1);
            picker.show_month(DisplayedMonth::new(year, month0)?);
        }

        let grid = picker.grid(&service)?;

        if self.json {
            let report = MonthReport {
                title: picker.displayed().title(),
                year: picker.displayed().year(),
                month: picker.displayed().month(),
                selected: picker.selected(),
                bounds: picker.bounds(),
                hide_header: picker.settings().hide_header,
                hide_diff_month_days: picker.settings().hide_diff_month_days,
                weekdays: &grid,
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize month grid")
        } else {
            Ok(render::render_month(&picker, &grid))
        }
    }

    /// File settings with command-line flags layered on top.
    fn load_settings(&self) -> Result<PickerSettings> {
        let mut settings = match &self.config {
            Some(path) => SettingsService::new(path).load()?,
            None => SettingsService::with_default_path()
                .and_then(|service| service.load())
                .unwrap_or_else(|err| {
                    log::warn!("Falling back to default settings: {:#}", err);
                    PickerSettings::default()
                }),
        };

        settings.hide_diff_month_days |= self.hide_diff_month_days;
        settings.hide_header |= self.hide_header;
        if self.min.is_some() {
            settings.min_date = self.min;
        }
        if self.max.is_some() {
            settings.max_date = self.max;
        }
        Ok(settings)
    }
}

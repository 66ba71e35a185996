use crate::models::settings::PickerSettings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and stores [`PickerSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "KenBoyle", "RustDatePicker")
            .context("Failed to determine config directory")?;
        Ok(dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn with_default_path() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::info!("No settings file at {:?}, using defaults", self.path);
            return Ok(PickerSettings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;
        let settings = PickerSettings::from_toml(&content)
            .with_context(|| format!("Failed to parse settings in {:?}", self.path))?;

        if settings.bounds().is_reversed() {
            log::warn!("Settings in {:?} have min_date after max_date", self.path);
        }
        log::info!("Loaded settings from {:?}", self.path);
        Ok(settings)
    }

    /// Write settings, creating the parent directory if needed.
    pub fn save(&self, settings: &PickerSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory: {:?}", parent))?;
        }

        let toml = settings.to_toml().context("Failed to serialize settings")?;
        fs::write(&self.path, toml)
            .with_context(|| format!("Failed to write settings to {:?}", self.path))?;

        log::info!("Saved settings to {:?}", self.path);
        Ok(())
    }
}

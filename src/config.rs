use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::theme::ThemeConfig;

pub const APP_NAME: &str = "calendar-widget";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub picker: PickerConfig,
    pub log: LogConfig,
}

/// Year range offered by the month/year picker.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            min_year: 2000,
            max_year: 2050,
        }
    }
}

impl PickerConfig {
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        let (lo, hi) = if self.min_year <= self.max_year {
            (self.min_year, self.max_year)
        } else {
            (self.max_year, self.min_year)
        };
        lo..=hi
    }

    pub fn clamp(&self, year: i32) -> i32 {
        let years = self.years();
        year.clamp(*years.start(), *years.end())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    pub fn path(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| dirs::cache_dir().map(|d| d.join(APP_NAME).join(format!("{APP_NAME}.log"))))
    }
}

impl Config {
    /// Load the user config, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME).join("config.toml"))
}

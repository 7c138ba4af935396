use anyhow::Result;
use chrono::Weekday;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// First column of every week. Accepts any weekday name chrono parses.
    pub week_start: Option<Weekday>,
    pub log:        Option<LogConfig>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    /// Also write a daily-rolling log file into the data directory.
    pub file:  Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir().join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
        } else {
            Ok(AppConfig::default())
        }
    }

    /// Falls back to defaults when the file cannot be read or parsed, handing
    /// the error back for the caller to report once logging is up.
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        Self::load_or_default_from(&config_dir().join("config.toml"))
    }

    pub fn load_or_default_from(path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::load_from(path) {
            Ok(cfg) => (cfg, None),
            Err(e)  => (AppConfig::default(), Some(e.context(format!("reading {}", path.display())))),
        }
    }

    pub fn week_start(&self) -> Weekday { self.week_start.unwrap_or(Weekday::Sun) }

    pub fn log_level(&self) -> &str {
        self.log.as_ref().and_then(|l| l.level.as_deref()).unwrap_or("warn")
    }

    pub fn log_to_file(&self) -> bool {
        self.log.as_ref().and_then(|l| l.file).unwrap_or(false)
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("monthgrid")
}

pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("monthgrid")
}

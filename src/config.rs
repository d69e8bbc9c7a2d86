// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::time_range::parse_hm;
use anyhow::{Error, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::{Display, EnumString};

fn default_true() -> bool {
    true
}

fn default_start_time() -> String {
    "10:00".to_string()
}

fn default_end_time() -> String {
    "11:00".to_string()
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Number the dates as ranked preferences on startup.
    #[serde(default = "default_true")]
    pub priority_enabled: bool,
    /// Ask for a time range for every picked date on startup.
    #[serde(default = "default_true")]
    pub time_enabled: bool,

    /// UI language (`ja`, `en`). Falls back to the system locale.
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub log_level: LogLevel,

    /// Path to an exported device calendar (`.ics`).
    #[serde(default)]
    pub calendar_file: Option<String>,
    /// Whether the calendar may be read at all.
    #[serde(default)]
    pub calendar_access: bool,

    // Initial values of the time picker, "HH:MM"
    #[serde(default = "default_start_time")]
    pub default_start_time: String,
    #[serde(default = "default_end_time")]
    pub default_end_time: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            priority_enabled: true,
            time_enabled: true,
            locale: None,
            log_level: LogLevel::default(),
            calendar_file: None,
            calendar_access: false,
            default_start_time: default_start_time(),
            default_end_time: default_end_time(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    /// Syntax and permission errors are still reported.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(c) => Ok(c),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::debug!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Helper to detect whether an anyhow::Error indicates that the config file was missing.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        // Walk the error chain and look for an underlying IO NotFound.
        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        atomic_write(&path, toml_str)?;
        Ok(())
    }

    /// Initial picker bounds. Unparseable values fall back to the built-in defaults.
    pub fn default_time_bounds(&self) -> (NaiveTime, NaiveTime) {
        let or_hour = |s: &str, h: u32| {
            parse_hm(s).unwrap_or_else(|| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN))
        };
        (
            or_hour(&self.default_start_time, 10),
            or_hour(&self.default_end_time, 11),
        )
    }
}

fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn missing_file_yields_defaults() {
        let ctx = TestContext::new();
        let err = Config::load(&ctx).unwrap_err();
        assert!(Config::is_missing_config_error(&err));
        assert_eq!(Config::load_or_default(&ctx).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "time_enabled = false\nlog_level = \"debug\"\n").unwrap();

        let cfg = Config::load(&ctx).unwrap();
        assert!(!cfg.time_enabled);
        assert!(cfg.priority_enabled);
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.default_start_time, "10:00");
    }

    #[test]
    fn malformed_file_is_not_treated_as_missing() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "priority_enabled = maybe").unwrap();

        let err = Config::load_or_default(&ctx).unwrap_err();
        assert!(!Config::is_missing_config_error(&err));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn save_then_load_keeps_values() {
        let ctx = TestContext::new();
        let cfg = Config {
            locale: Some("ja".to_string()),
            calendar_access: true,
            calendar_file: Some("/tmp/cal.ics".to_string()),
            ..Config::default()
        };
        cfg.save(&ctx).unwrap();
        assert_eq!(Config::load(&ctx).unwrap(), cfg);
    }

    #[test]
    fn bad_default_times_fall_back() {
        let cfg = Config {
            default_start_time: "soon".to_string(),
            ..Config::default()
        };
        let (start, end) = cfg.default_time_bounds();
        assert_eq!(start, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert!("loud".parse::<LogLevel>().is_err());
    }
}

// File: ./src/logging.rs
//! Logger setup for the desktop binaries.
//!
//! The TUI owns the terminal, so it logs to a file in the cache dir. One-shot
//! commands log to stderr. Android installs `android_logger` from the mobile
//! facade instead.
use crate::config::LogLevel;
use crate::context::AppContext;
use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

fn log_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .add_filter_allow_str("nittei")
        .build()
}

/// Appends to `nittei.log` in the cache dir. Returns the log path.
pub fn init_file_logger(ctx: &dyn AppContext, level: LogLevel) -> Result<PathBuf> {
    let path = ctx.get_log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;
    WriteLogger::init(level.into(), log_config(), file)
        .context("A logger was already installed")?;
    Ok(path)
}

pub fn init_term_logger(level: LogLevel) -> Result<()> {
    TermLogger::init(
        level.into(),
        log_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("A logger was already installed")
}

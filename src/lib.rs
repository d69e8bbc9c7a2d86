// Crate root library declaration and module exports.
pub mod calendar;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod context;
pub mod error;
pub mod help;
pub mod locale;
pub mod logging;
pub mod model;
pub mod notice;

#[cfg(feature = "tui")]
pub mod tui;

// --- ANDROID SUPPORT ---
#[cfg(feature = "mobile")]
pub mod mobile;

#[cfg(feature = "mobile")]
uniffi::setup_scaffolding!();

rust_i18n::i18n!("locales", fallback = "en");

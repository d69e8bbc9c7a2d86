// File: ./src/locale.rs
//! Picks the UI language for notices and labels.

pub const SUPPORTED: [&str; 2] = ["en", "ja"];

/// Maps a BCP 47 tag (`ja-JP`, `en_US.UTF-8`) onto a bundled locale.
pub fn resolve(tag: &str) -> &'static str {
    let lang = tag
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    SUPPORTED
        .iter()
        .find(|l| **l == lang)
        .copied()
        .unwrap_or("en")
}

/// Applies the configured locale, or the system one when unset.
pub fn init(config_override: Option<&str>) -> &'static str {
    let tag = config_override
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let locale = resolve(&tag);
    rust_i18n::set_locale(locale);
    log::debug!("UI locale {} (from {})", locale, tag);
    locale
}

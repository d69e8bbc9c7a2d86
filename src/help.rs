// File: ./src/help.rs
//! Localized keyboard help.
//!
//! Built at runtime so the text follows the active locale (via
//! `rust_i18n::t!()`).
use rust_i18n::t;

#[derive(Clone, Debug)]
pub struct HelpItem {
    pub keys: String,
    pub desc: String,
}

#[derive(Clone, Debug)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<HelpItem>,
}

fn item(keys: &str, desc: impl Into<String>) -> HelpItem {
    HelpItem {
        keys: keys.to_string(),
        desc: desc.into(),
    }
}

pub fn get_keyboard_help() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: t!("help_global").to_string(),
            items: vec![
                item("Tab", t!("help_key_focus")),
                item("p", t!("help_key_toggle_priority")),
                item("t", t!("help_key_toggle_time")),
                item("y / c", t!("help_key_copy")),
                item("v", t!("help_key_events")),
                item("?", t!("help_key_help")),
                item("q", t!("help_key_quit")),
            ],
        },
        HelpSection {
            title: t!("help_calendar").to_string(),
            items: vec![
                item("←/→ h/l", t!("help_key_move_day")),
                item("↑/↓ k/j", t!("help_key_move_week")),
                item("PgUp/PgDn [ ]", t!("help_key_move_month")),
                item("Home .", t!("help_key_today")),
                item("Enter Space", t!("help_key_pick")),
            ],
        },
        HelpSection {
            title: t!("help_list").to_string(),
            items: vec![
                item("↑/↓ k/j", t!("help_key_select")),
                item("d Del", t!("help_key_delete")),
            ],
        },
        HelpSection {
            title: t!("help_time").to_string(),
            items: vec![
                item("Tab", t!("help_key_switch_field")),
                item("↑/↓ +/-", t!("help_key_adjust")),
                item("Enter", t!("help_key_confirm")),
                item("Esc", t!("help_key_cancel")),
            ],
        },
    ]
}

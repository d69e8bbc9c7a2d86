// File: ./src/tui/handlers.rs
// Translates key presses and worker events into state changes.
use crate::calendar;
use crate::clipboard::Osc52Clipboard;
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::{AppState, Focus, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;
use tokio::sync::mpsc::Sender;

pub fn handle_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::CalendarLoaded(result) => {
            state.loading_events = false;
            if let Some(notice) = calendar::listing_notice(&result) {
                state.notify(&notice);
            }
            if let Ok(events) = result {
                if !events.is_empty() {
                    state.mode = InputMode::ViewingEvents;
                    state.set_status(rust_i18n::t!("device_events"));
                }
                state.events = events;
            }
        }
    }
}

/// Returns an action for the caller to dispatch, if the key produced one.
pub async fn handle_key_event(
    key: KeyEvent,
    state: &mut AppState,
    action_tx: &Sender<Action>,
) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match state.mode {
        InputMode::PickingTime => {
            match key.code {
                KeyCode::Enter => state.confirm_time(),
                KeyCode::Esc => state.cancel_time(),
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                    state.switch_time_field()
                }
                KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('k') => state.adjust_time(15),
                KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('j') => state.adjust_time(-15),
                KeyCode::PageUp => state.adjust_time(60),
                KeyCode::PageDown => state.adjust_time(-60),
                _ => {}
            }
            None
        }
        InputMode::ViewingEvents => {
            // Any key closes the read-only listing.
            state.mode = InputMode::Normal;
            None
        }
        InputMode::Normal => handle_normal_key(key, state, action_tx).await,
    }
}

async fn handle_normal_key(
    key: KeyEvent,
    state: &mut AppState,
    action_tx: &Sender<Action>,
) -> Option<Action> {
    // Keys shared by both panes
    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('?') => {
            state.show_full_help = !state.show_full_help;
            return None;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.focus = match state.focus {
                Focus::Calendar => Focus::List,
                Focus::List => Focus::Calendar,
            };
            return None;
        }
        KeyCode::Char('p') => {
            state.toggle_priority();
            return None;
        }
        KeyCode::Char('t') => {
            state.toggle_time();
            return None;
        }
        KeyCode::Char('y') | KeyCode::Char('c') => {
            state.copy_to(&mut Osc52Clipboard::new(io::stdout()));
            return None;
        }
        KeyCode::Char('v') => {
            if !state.loading_events {
                state.loading_events = true;
                state.set_status("...");
                let _ = action_tx.send(Action::FetchCalendar).await;
            }
            return None;
        }
        _ => {}
    }

    match state.focus {
        Focus::Calendar => match key.code {
            KeyCode::Left | KeyCode::Char('h') => state.move_cursor_days(-1),
            KeyCode::Right | KeyCode::Char('l') => state.move_cursor_days(1),
            KeyCode::Up | KeyCode::Char('k') => state.move_cursor_days(-7),
            KeyCode::Down | KeyCode::Char('j') => state.move_cursor_days(7),
            KeyCode::PageUp | KeyCode::Char('[') => state.move_cursor_months(-1),
            KeyCode::PageDown | KeyCode::Char(']') => state.move_cursor_months(1),
            KeyCode::Home | KeyCode::Char('.') => state.jump_today(),
            KeyCode::Enter | KeyCode::Char(' ') => state.pick_cursor_day(),
            _ => {}
        },
        Focus::List => match key.code {
            KeyCode::Down | KeyCode::Char('j') => state.next(),
            KeyCode::Up | KeyCode::Char('k') => state.previous(),
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => state.remove_selected(),
            _ => {}
        },
    }
    None
}

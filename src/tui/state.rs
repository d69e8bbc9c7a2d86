// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::calendar::{CalendarEvent, FetchWindow};
use crate::clipboard::{self, ClipboardSink};
use crate::config::Config;
use crate::model::{AddOutcome, Day, SelectionList};
use crate::notice::Notice;
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime};
use ratatui::widgets::ListState;
use std::collections::HashSet;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Focus {
    Calendar,
    List,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputMode {
    Normal,
    PickingTime,
    ViewingEvents,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum TimeField {
    Start,
    End,
}

/// Values shown in the time modal for the pending day.
#[derive(Clone, Copy, Debug)]
pub struct TimeDraft {
    pub day: Day,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub field: TimeField,
}

pub struct AppState {
    // Data
    pub selection: SelectionList,
    pub events: Vec<CalendarEvent>,

    // UI State
    pub today: Day,
    pub cursor: Day,
    pub list_state: ListState,
    pub focus: Focus,
    pub mode: InputMode,
    pub message: String,
    pub message_is_error: bool,
    pub loading_events: bool,
    pub show_full_help: bool,

    // Time modal
    pub time_draft: Option<TimeDraft>,
    pub default_times: (NaiveTime, NaiveTime),
}

impl AppState {
    /// Creates a new AppState from the loaded config.
    pub fn new(config: &Config, today: Day) -> Self {
        Self {
            selection: SelectionList::new(config.priority_enabled, config.time_enabled),
            events: Vec::new(),
            today,
            cursor: today,
            list_state: ListState::default(),
            focus: Focus::Calendar,
            mode: InputMode::Normal,
            message: rust_i18n::t!("ready").to_string(),
            message_is_error: false,
            loading_events: false,
            show_full_help: false,
            time_draft: None,
            default_times: config.default_time_bounds(),
        }
    }

    pub fn notify(&mut self, notice: &Notice) {
        self.message = notice.line();
        self.message_is_error = notice.is_error();
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
        self.message_is_error = false;
    }

    // --- Calendar cursor ---

    pub fn move_cursor_days(&mut self, days: i64) {
        if let Some(d) = self
            .cursor
            .date()
            .checked_add_signed(Duration::days(days))
        {
            self.cursor = Day::new(d);
        }
    }

    pub fn move_cursor_months(&mut self, months: i32) {
        let date = self.cursor.date();
        let moved = if months >= 0 {
            date.checked_add_months(Months::new(months as u32))
        } else {
            date.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(d) = moved {
            self.cursor = Day::new(d);
        }
    }

    pub fn jump_today(&mut self) {
        self.cursor = self.today;
    }

    /// Weeks of the cursor's month, Sunday first. Cells outside the month are `None`.
    pub fn month_grid(&self) -> Vec<[Option<Day>; 7]> {
        let date = self.cursor.date();
        let Some(first) = NaiveDate::from_ymd_opt(date.year(), date.month(), 1) else {
            return Vec::new();
        };
        let offset = first.weekday().num_days_from_sunday() as usize;

        let mut weeks = Vec::new();
        let mut week: [Option<Day>; 7] = [None; 7];
        let mut col = offset;
        for d in first.iter_days().take_while(|d| d.month() == first.month()) {
            week[col] = Some(Day::new(d));
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col != 0 {
            weeks.push(week);
        }
        weeks
    }

    /// Days covered by at least one loaded device calendar event, within the
    /// fetch window.
    pub fn busy_days(&self) -> HashSet<Day> {
        let window = FetchWindow::one_month_from(self.today);
        self.events
            .iter()
            .flat_map(|e| e.days_within(&window))
            .collect()
    }

    // --- Selection operations ---

    /// Picks the day under the cursor. Opens the time modal when time mode is on.
    pub fn pick_cursor_day(&mut self) {
        let day = self.cursor;
        match self.selection.add_date(day, None) {
            Ok(AddOutcome::Added) => {
                self.list_state.select(Some(self.selection.len() - 1));
                self.set_status(day.format_ja());
            }
            Ok(AddOutcome::AwaitingTime) => {
                let (start, end) = self.default_times;
                self.time_draft = Some(TimeDraft {
                    day,
                    start,
                    end,
                    field: TimeField::Start,
                });
                self.mode = InputMode::PickingTime;
                self.set_status(rust_i18n::t!("pending_time", day = day.format_ja()));
            }
            Err(e) => self.notify(&Notice::from(&e)),
        }
    }

    /// Commits the modal's range. On a bad range the modal stays open.
    pub fn confirm_time(&mut self) {
        let Some(draft) = self.time_draft else {
            return;
        };
        match self
            .selection
            .confirm_time_range(draft.day, Some(draft.start), Some(draft.end))
        {
            Ok(()) => {
                self.time_draft = None;
                self.mode = InputMode::Normal;
                self.list_state.select(Some(self.selection.len() - 1));
                self.set_status(draft.day.format_ja());
            }
            Err(e) => self.notify(&Notice::from(&e)),
        }
    }

    pub fn cancel_time(&mut self) {
        self.selection.cancel_pending();
        self.time_draft = None;
        self.mode = InputMode::Normal;
        self.set_status(rust_i18n::t!("ready"));
    }

    pub fn switch_time_field(&mut self) {
        if let Some(draft) = &mut self.time_draft {
            draft.field = match draft.field {
                TimeField::Start => TimeField::End,
                TimeField::End => TimeField::Start,
            };
        }
    }

    /// Moves the focused bound, wrapping around midnight.
    pub fn adjust_time(&mut self, minutes: i64) {
        if let Some(draft) = &mut self.time_draft {
            let t = match draft.field {
                TimeField::Start => &mut draft.start,
                TimeField::End => &mut draft.end,
            };
            *t = t.overflowing_add_signed(Duration::minutes(minutes)).0;
        }
    }

    pub fn selected_key(&self) -> Option<Day> {
        self.list_state
            .selected()
            .and_then(|i| self.selection.rows().get(i))
            .map(|r| r.key)
    }

    /// Swipe-to-delete equivalent: removes the highlighted row.
    pub fn remove_selected(&mut self) {
        let Some(day) = self.selected_key() else {
            return;
        };
        if self.selection.remove_date(day) {
            self.clamp_list_selection();
            self.set_status(rust_i18n::t!("removed", day = day.format_ja()));
        }
    }

    pub fn toggle_priority(&mut self) {
        let flag = !self.selection.priority_enabled();
        self.selection.set_priority_enabled(flag);
    }

    pub fn toggle_time(&mut self) {
        let flag = !self.selection.time_enabled();
        self.selection.set_time_enabled(flag);
        if self.selection.pending().is_none() && self.time_draft.take().is_some() {
            self.mode = InputMode::Normal;
        }
    }

    pub fn copy_to(&mut self, sink: &mut dyn ClipboardSink) {
        if let Some(notice) = clipboard::copy_selection(&self.selection, sink) {
            self.notify(&notice);
        }
    }

    // --- List navigation ---

    pub fn next(&mut self) {
        let len = self.selection.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    fn clamp_list_selection(&mut self) {
        let len = self.selection.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(current.min(len - 1)));
        }
    }
}

// File: ./src/model/selection.rs
//! The ordered list of candidate dates and its rendered projection.
//!
//! All UI layers (TUI, mobile) own one `SelectionList` per screen and route
//! every user action through it. Each operation is atomic: it either applies
//! fully and refreshes the rendered rows, or returns an error and leaves the
//! list, the pending selection and the rows untouched.
use crate::error::SelectionError;
use crate::model::day::Day;
use crate::model::display::{self, DisplayFlags, DisplayRow};
use crate::model::entry::{PendingSelection, SelectedDate};
use crate::model::time_range::TimeRange;

/// Result of a successful [`SelectionList::add_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The day was appended to the list.
    Added,
    /// Time mode is on: the day is now pending and the caller must prompt for
    /// a range, then call [`SelectionList::confirm_time_range`].
    AwaitingTime,
}

#[derive(Debug, Clone)]
pub struct SelectionList {
    entries: Vec<SelectedDate>,
    priority_enabled: bool,
    time_enabled: bool,
    pending: Option<PendingSelection>,
    rows: Vec<DisplayRow>,
}

impl Default for SelectionList {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl SelectionList {
    pub fn new(priority_enabled: bool, time_enabled: bool) -> Self {
        Self {
            entries: Vec::new(),
            priority_enabled,
            time_enabled,
            pending: None,
            rows: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[SelectedDate] {
        &self.entries
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn pending(&self) -> Option<PendingSelection> {
        self.pending
    }

    pub fn priority_enabled(&self) -> bool {
        self.priority_enabled
    }

    pub fn time_enabled(&self) -> bool {
        self.time_enabled
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, day: Day) -> bool {
        self.entries.iter().any(|e| e.day() == day)
    }

    fn flags(&self) -> DisplayFlags {
        DisplayFlags {
            priority: self.priority_enabled,
            time: self.time_enabled,
        }
    }

    fn recompute(&mut self) {
        self.rows = display::project(&self.entries, self.flags());
    }

    fn push(&mut self, entry: SelectedDate) {
        log::debug!("Selected {} (now {} dates)", entry.day(), self.entries.len() + 1);
        self.entries.push(entry);
        self.recompute();
    }

    /// Adds a picked day.
    ///
    /// With time mode off the day is appended at once and any supplied range
    /// is ignored. With time mode on a supplied range commits immediately and
    /// discards any pending day; without one the day becomes the pending
    /// selection, replacing any older pending day. A rejected pick leaves the
    /// pending day as it was.
    pub fn add_date(
        &mut self,
        day: Day,
        time: Option<TimeRange>,
    ) -> Result<AddOutcome, SelectionError> {
        if self.contains(day) {
            log::info!("Rejected duplicate day {}", day);
            return Err(SelectionError::DuplicateDate(day));
        }

        if !self.time_enabled {
            self.push(SelectedDate::new(day));
            return Ok(AddOutcome::Added);
        }

        match time {
            Some(range) => {
                self.pending = None;
                self.push(SelectedDate::with_time(day, range));
                Ok(AddOutcome::Added)
            }
            None => {
                log::debug!("Holding {} until a time range is confirmed", day);
                self.pending = Some(PendingSelection { day });
                Ok(AddOutcome::AwaitingTime)
            }
        }
    }

    /// Commits the pending day with a time range.
    ///
    /// Fails without mutation when time mode is off or `day` is not the
    /// pending day (`NoPendingSelection`), when either
    /// bound is missing, or when `start >= end`. On a bad range the day stays
    /// pending so the caller can prompt again.
    pub fn confirm_time_range(
        &mut self,
        day: Day,
        start: Option<chrono::NaiveTime>,
        end: Option<chrono::NaiveTime>,
    ) -> Result<(), SelectionError> {
        if !self.time_enabled || self.pending.map(|p| p.day) != Some(day) {
            return Err(SelectionError::NoPendingSelection(day));
        }
        let range = TimeRange::from_bounds(start, end).inspect_err(|_| {
            log::info!("Rejected time range for {}: {:?}..{:?}", day, start, end);
        })?;
        if self.contains(day) {
            return Err(SelectionError::DuplicateDate(day));
        }

        self.pending = None;
        self.push(SelectedDate::with_time(day, range));
        Ok(())
    }

    /// Drops the pending day, if any. The list is not touched.
    pub fn cancel_pending(&mut self) -> Option<PendingSelection> {
        self.pending.take()
    }

    /// Removes the entry for `day`. Absent days are a silent no-op; returns
    /// whether anything was removed.
    pub fn remove_date(&mut self, day: Day) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.day() != day);
        let removed = self.entries.len() != before;
        if removed {
            log::debug!("Removed {} ({} dates left)", day, self.entries.len());
            self.recompute();
        }
        removed
    }

    pub fn set_priority_enabled(&mut self, enabled: bool) {
        self.priority_enabled = enabled;
        self.recompute();
    }

    /// Turning time mode off only hides stored ranges; they reappear when it
    /// is turned back on. A day still waiting for its range is dropped.
    pub fn set_time_enabled(&mut self, enabled: bool) {
        self.time_enabled = enabled;
        if !enabled && let Some(p) = self.pending.take() {
            log::debug!("Dropped pending day {} with time mode off", p.day);
        }
        self.recompute();
    }

    /// Newline-joined display text in list order. Empty list yields `""`.
    pub fn export_text(&self) -> String {
        self.rows
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn day(s: &str) -> Day {
        s.parse().unwrap()
    }

    fn hm(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn pending_day_is_not_listed_until_confirmed() {
        let mut list = SelectionList::new(true, true);
        assert_eq!(
            list.add_date(day("2024-06-01"), None),
            Ok(AddOutcome::AwaitingTime)
        );
        assert!(list.is_empty());
        assert!(list.rows().is_empty());
        assert_eq!(list.pending().map(|p| p.day), Some(day("2024-06-01")));

        list.confirm_time_range(day("2024-06-01"), hm(9, 0), hm(10, 30))
            .unwrap();
        assert_eq!(list.pending(), None);
        assert_eq!(list.rows()[0].text, "第1希望：6月1日（土）09:00～10:30");
    }

    #[test]
    fn bad_range_keeps_day_pending() {
        let mut list = SelectionList::new(false, true);
        list.add_date(day("2024-06-01"), None).unwrap();
        assert_eq!(
            list.confirm_time_range(day("2024-06-01"), hm(10, 0), hm(9, 0)),
            Err(SelectionError::InvalidTimeRange)
        );
        assert_eq!(
            list.confirm_time_range(day("2024-06-01"), None, hm(9, 0)),
            Err(SelectionError::InvalidTimeRange)
        );
        assert!(list.is_empty());
        assert_eq!(list.pending().map(|p| p.day), Some(day("2024-06-01")));
    }

    #[test]
    fn confirm_for_other_day_is_rejected() {
        let mut list = SelectionList::new(false, true);
        list.add_date(day("2024-06-01"), None).unwrap();
        assert_eq!(
            list.confirm_time_range(day("2024-06-02"), hm(9, 0), hm(10, 0)),
            Err(SelectionError::NoPendingSelection(day("2024-06-02")))
        );
        assert_eq!(list.pending().map(|p| p.day), Some(day("2024-06-01")));
    }

    #[test]
    fn newer_pick_replaces_pending_day() {
        let mut list = SelectionList::new(false, true);
        list.add_date(day("2024-06-01"), None).unwrap();
        list.add_date(day("2024-06-02"), None).unwrap();
        assert_eq!(list.pending().map(|p| p.day), Some(day("2024-06-02")));
        assert_eq!(list.cancel_pending().map(|p| p.day), Some(day("2024-06-02")));
        assert_eq!(list.pending(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn supplied_range_is_ignored_when_time_mode_is_off() {
        let mut list = SelectionList::new(false, false);
        let range = TimeRange::parse("09:00", "10:00").unwrap();
        assert_eq!(
            list.add_date(day("2024-06-01"), Some(range)),
            Ok(AddOutcome::Added)
        );
        assert_eq!(list.entries()[0].time(), None);
        list.set_time_enabled(true);
        assert_eq!(list.export_text(), "6月1日（土）");
    }

    #[test]
    fn disabling_time_hides_but_keeps_ranges() {
        let mut list = SelectionList::new(false, true);
        let range = TimeRange::parse("13:00", "14:00").unwrap();
        list.add_date(day("2024-06-01"), Some(range)).unwrap();
        list.set_time_enabled(false);
        assert_eq!(list.export_text(), "6月1日（土）");
        assert_eq!(list.entries()[0].start_time().as_deref(), Some("13:00"));
        list.set_time_enabled(true);
        assert_eq!(list.export_text(), "6月1日（土）13:00～14:00");
    }

    #[test]
    fn removing_absent_day_is_a_no_op() {
        let mut list = SelectionList::new(true, false);
        list.add_date(day("2024-06-01"), None).unwrap();
        assert!(!list.remove_date(day("2024-07-01")));
        assert_eq!(list.len(), 1);
    }
}

/* nittei/src/mobile.rs
 *
 * UniFFI interface for exposing the selection model to mobile platforms.
 */

use crate::calendar::FetchWindow;
use crate::error::SelectionError;
use crate::model::time_range::parse_hm;
use crate::model::{AddOutcome, Day, DisplayRow, SelectionList, TimeRange};
use crate::notice::Notice;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum MobileError {
    #[error("{0} is already selected")]
    DuplicateDate(String),
    #[error("invalid time range")]
    InvalidTimeRange,
    #[error("no pending selection for {0}")]
    NoPendingSelection(String),
    #[error("invalid day '{0}'")]
    InvalidDay(String),
    #[error("{0}")]
    Generic(String),
}

impl From<SelectionError> for MobileError {
    fn from(e: SelectionError) -> Self {
        match e {
            SelectionError::DuplicateDate(d) => Self::DuplicateDate(d.to_string()),
            SelectionError::InvalidTimeRange => Self::InvalidTimeRange,
            SelectionError::NoPendingSelection(d) => Self::NoPendingSelection(d.to_string()),
        }
    }
}

#[derive(uniffi::Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileAddOutcome {
    Added,
    AwaitingTime,
}

impl From<AddOutcome> for MobileAddOutcome {
    fn from(o: AddOutcome) -> Self {
        match o {
            AddOutcome::Added => Self::Added,
            AddOutcome::AwaitingTime => Self::AwaitingTime,
        }
    }
}

#[derive(uniffi::Record, Debug, Clone, PartialEq, Eq)]
pub struct MobileRow {
    /// ISO day, used as the list key and for swipe-to-delete.
    pub day: String,
    pub rank: Option<u32>,
    pub text: String,
}

impl From<&DisplayRow> for MobileRow {
    fn from(r: &DisplayRow) -> Self {
        Self {
            day: r.key.to_string(),
            rank: r.rank.map(|n| n as u32),
            text: r.text.clone(),
        }
    }
}

/// Half-open `[start, end)` range of ISO days.
#[derive(uniffi::Record, Debug, Clone, PartialEq, Eq)]
pub struct MobileFetchWindow {
    pub start: String,
    pub end: String,
}

fn parse_day(s: &str) -> Result<Day, MobileError> {
    s.parse::<Day>()
        .map_err(|_| MobileError::InvalidDay(s.to_string()))
}

#[derive(uniffi::Object)]
pub struct NitteiMobile {
    selection: Mutex<SelectionList>,
}

#[uniffi::export]
impl NitteiMobile {
    #[uniffi::constructor]
    pub fn new(priority_enabled: bool, time_enabled: bool) -> Self {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("NitteiRust"),
        );
        Self {
            selection: Mutex::new(SelectionList::new(priority_enabled, time_enabled)),
        }
    }

    /// Applies the device locale to notices and labels.
    pub fn set_locale(&self, tag: String) -> String {
        crate::locale::init(Some(&tag)).to_string()
    }

    pub fn add_date(&self, day: String) -> Result<MobileAddOutcome, MobileError> {
        let day = parse_day(&day)?;
        Ok(self.lock()?.add_date(day, None)?.into())
    }

    /// Adds a day with its range in one step. The range is dropped when time mode is off.
    pub fn add_date_with_time(
        &self,
        day: String,
        start: String,
        end: String,
    ) -> Result<MobileAddOutcome, MobileError> {
        let day = parse_day(&day)?;
        let mut list = self.lock()?;
        let range = if list.time_enabled() {
            Some(TimeRange::parse(&start, &end)?)
        } else {
            None
        };
        Ok(list.add_date(day, range)?.into())
    }

    /// Empty or malformed bounds count as missing.
    pub fn confirm_time_range(
        &self,
        day: String,
        start: Option<String>,
        end: Option<String>,
    ) -> Result<(), MobileError> {
        let day = parse_day(&day)?;
        let start = start.as_deref().and_then(parse_hm);
        let end = end.as_deref().and_then(parse_hm);
        self.lock()?.confirm_time_range(day, start, end)?;
        Ok(())
    }

    pub fn pending_day(&self) -> Result<Option<String>, MobileError> {
        Ok(self.lock()?.pending().map(|p| p.day.to_string()))
    }

    pub fn cancel_pending(&self) -> Result<(), MobileError> {
        self.lock()?.cancel_pending();
        Ok(())
    }

    pub fn remove_date(&self, day: String) -> Result<bool, MobileError> {
        let day = parse_day(&day)?;
        Ok(self.lock()?.remove_date(day))
    }

    pub fn set_priority_enabled(&self, enabled: bool) -> Result<(), MobileError> {
        self.lock()?.set_priority_enabled(enabled);
        Ok(())
    }

    pub fn set_time_enabled(&self, enabled: bool) -> Result<(), MobileError> {
        self.lock()?.set_time_enabled(enabled);
        Ok(())
    }

    pub fn rows(&self) -> Result<Vec<MobileRow>, MobileError> {
        Ok(self.lock()?.rows().iter().map(MobileRow::from).collect())
    }

    /// `None` when nothing is selected; the host hides the copy button then.
    pub fn export_text(&self) -> Result<Option<String>, MobileError> {
        let list = self.lock()?;
        if list.is_empty() {
            return Ok(None);
        }
        Ok(Some(list.export_text()))
    }

    /// Maps the host clipboard result onto the acknowledgement to show.
    pub fn copy_notice(&self, success: bool) -> Notice {
        if success {
            Notice::copied()
        } else {
            Notice::copy_failed()
        }
    }

    pub fn fetch_window(&self, today: String) -> Result<MobileFetchWindow, MobileError> {
        let window = FetchWindow::one_month_from(parse_day(&today)?);
        Ok(MobileFetchWindow {
            start: window.start.to_string(),
            end: window.end.to_string(),
        })
    }

    /// Notice for the host's calendar read, or `None` when events should be listed.
    pub fn calendar_notice(
        &self,
        granted: bool,
        event_count: u32,
        error: Option<String>,
    ) -> Option<Notice> {
        let result = if !granted {
            Err(crate::error::CalendarError::PermissionDenied)
        } else if let Some(e) = error {
            Err(crate::error::CalendarError::Fetch(e))
        } else {
            Ok(event_count)
        };
        match result {
            Ok(0) => Some(Notice::calendar_empty()),
            Ok(_) => None,
            Err(e) => Some(Notice::from(&e)),
        }
    }
}

impl NitteiMobile {
    fn lock(&self) -> Result<MutexGuard<'_, SelectionList>, MobileError> {
        self.selection
            .lock()
            .map_err(|_| MobileError::Generic("selection lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_phase_add_through_the_facade() {
        let m = NitteiMobile::new(true, true);
        assert_eq!(
            m.add_date("2024-06-01".into()).unwrap(),
            MobileAddOutcome::AwaitingTime
        );
        assert_eq!(m.pending_day().unwrap().as_deref(), Some("2024-06-01"));

        let err = m
            .confirm_time_range("2024-06-01".into(), Some("10:30".into()), Some("09:00".into()))
            .unwrap_err();
        assert!(matches!(err, MobileError::InvalidTimeRange));

        m.confirm_time_range("2024-06-01".into(), Some("09:00".into()), Some("10:30".into()))
            .unwrap();
        let rows = m.rows().unwrap();
        assert_eq!(rows[0].text, "第1希望：6月1日（土）09:00～10:30");
        assert_eq!(rows[0].rank, Some(1));
    }

    #[test]
    fn bad_input_is_reported() {
        let m = NitteiMobile::new(false, false);
        assert!(matches!(
            m.add_date("June 1".into()),
            Err(MobileError::InvalidDay(_))
        ));
        m.add_date("2024-06-01".into()).unwrap();
        assert!(matches!(
            m.add_date("2024-06-01".into()),
            Err(MobileError::DuplicateDate(_))
        ));
        assert_eq!(m.export_text().unwrap().as_deref(), Some("6月1日（土）"));
        assert!(m.remove_date("2024-06-01".into()).unwrap());
        assert_eq!(m.export_text().unwrap(), None);
    }

    #[test]
    fn range_is_ignored_when_time_mode_is_off() {
        let m = NitteiMobile::new(true, false);
        assert_eq!(
            m.add_date_with_time("2024-06-01".into(), "later".into(), "".into())
                .unwrap(),
            MobileAddOutcome::Added
        );
        assert_eq!(m.export_text().unwrap().as_deref(), Some("第1希望：6月1日（土）"));

        m.set_time_enabled(true).unwrap();
        assert!(matches!(
            m.add_date_with_time("2024-06-02".into(), "later".into(), "".into()),
            Err(MobileError::InvalidTimeRange)
        ));
    }

    #[test]
    fn toggling_time_off_abandons_the_time_picker() {
        let m = NitteiMobile::new(true, true);
        m.add_date("2024-06-01".into()).unwrap();
        m.set_time_enabled(false).unwrap();
        assert!(matches!(
            m.confirm_time_range("2024-06-01".into(), Some("09:00".into()), Some("10:00".into())),
            Err(MobileError::NoPendingSelection(_))
        ));
        assert_eq!(m.export_text().unwrap(), None);
    }

    #[test]
    fn calendar_notice_covers_each_outcome() {
        let m = NitteiMobile::new(true, true);
        assert!(m.calendar_notice(false, 0, None).unwrap().is_error());
        assert!(m.calendar_notice(true, 0, Some("boom".into())).unwrap().is_error());
        assert!(!m.calendar_notice(true, 0, None).unwrap().is_error());
        assert_eq!(m.calendar_notice(true, 3, None), None);
    }
}

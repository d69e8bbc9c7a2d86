// File: ./src/notice.rs
//! User-facing acknowledgements.
//!
//! Every terminal outcome the user should hear about (a rejected pick, a copy
//! result, a calendar read result) becomes exactly one localized `Notice`.
//! Frontends only render notices; they never format error text themselves.
use crate::error::{CalendarError, ClipboardError, SelectionError};
use rust_i18n::t;

#[cfg_attr(feature = "mobile", derive(uniffi::Enum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[cfg_attr(feature = "mobile", derive(uniffi::Record))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn copied() -> Self {
        Self::new(
            NoticeKind::Info,
            t!("notice_copied_title"),
            t!("notice_copied_body"),
        )
    }

    pub fn copy_failed() -> Self {
        Self::new(
            NoticeKind::Error,
            t!("notice_copy_failed_title"),
            t!("notice_copy_failed_body"),
        )
    }

    pub fn calendar_empty() -> Self {
        Self::new(
            NoticeKind::Info,
            t!("notice_calendar_empty_title"),
            t!("notice_calendar_empty_body"),
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    /// Single-line form for status bars.
    pub fn line(&self) -> String {
        format!("{}: {}", self.title, self.body)
    }
}

impl From<&SelectionError> for Notice {
    fn from(e: &SelectionError) -> Self {
        match e {
            SelectionError::DuplicateDate(_) => Self::new(
                NoticeKind::Error,
                t!("notice_duplicate_title"),
                t!("notice_duplicate_body"),
            ),
            SelectionError::InvalidTimeRange => Self::new(
                NoticeKind::Error,
                t!("notice_invalid_time_title"),
                t!("notice_invalid_time_body"),
            ),
            SelectionError::NoPendingSelection(_) => Self::new(
                NoticeKind::Error,
                t!("notice_no_pending_title"),
                t!("notice_no_pending_body"),
            ),
        }
    }
}

impl From<&CalendarError> for Notice {
    fn from(e: &CalendarError) -> Self {
        match e {
            CalendarError::PermissionDenied => Self::new(
                NoticeKind::Error,
                t!("notice_permission_title"),
                t!("notice_permission_body"),
            ),
            CalendarError::Fetch(_) => Self::new(
                NoticeKind::Error,
                t!("notice_fetch_failed_title"),
                t!("notice_fetch_failed_body"),
            ),
        }
    }
}

impl From<&ClipboardError> for Notice {
    fn from(_: &ClipboardError) -> Self {
        Self::copy_failed()
    }
}

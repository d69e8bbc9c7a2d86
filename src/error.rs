// File: ./src/error.rs
//! Error kinds for the selection model and its external collaborators.
//!
//! Every error is terminal for the operation that raised it: the model is left
//! exactly as it was, and the caller turns the error into a single
//! [`Notice`](crate::notice::Notice). Nothing here is retried.
use crate::model::Day;
use thiserror::Error;

/// Rejections raised by [`SelectionList`](crate::model::SelectionList) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The day is already in the list.
    #[error("{0} is already selected")]
    DuplicateDate(Day),

    /// A bound is missing, or the start is not strictly before the end.
    #[error("start time must be before end time")]
    InvalidTimeRange,

    /// A time range was confirmed for a day that is not awaiting one.
    #[error("{0} is not awaiting a time range")]
    NoPendingSelection(Day),
}

/// Failures of the read-only device calendar path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("calendar access was not granted")]
    PermissionDenied,

    #[error("could not read calendar events: {0}")]
    Fetch(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("could not write to the clipboard: {0}")]
    Write(String),
}

impl From<std::io::Error> for ClipboardError {
    fn from(e: std::io::Error) -> Self {
        Self::Write(e.to_string())
    }
}

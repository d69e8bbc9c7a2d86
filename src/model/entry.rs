// File: ./src/model/entry.rs
use crate::model::day::Day;
use crate::model::time_range::TimeRange;
use serde::{Deserialize, Serialize};

/// A committed candidate date. The time range is either fully present or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDate {
    day: Day,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<TimeRange>,
}

impl SelectedDate {
    pub fn new(day: Day) -> Self {
        Self { day, time: None }
    }

    pub fn with_time(day: Day, time: TimeRange) -> Self {
        Self {
            day,
            time: Some(time),
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn time(&self) -> Option<&TimeRange> {
        self.time.as_ref()
    }

    pub fn start_time(&self) -> Option<String> {
        self.time.map(|t| t.start_text())
    }

    pub fn end_time(&self) -> Option<String> {
        self.time.map(|t| t.end_text())
    }
}

/// A day picked while time mode was on, waiting for its time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSelection {
    pub day: Day,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_range_must_be_ordered() {
        let ok: SelectedDate = serde_json::from_str(
            r#"{"day":"2024-06-01","time":{"start":"09:00:00","end":"10:00:00"}}"#,
        )
        .unwrap();
        assert_eq!(ok.start_time().as_deref(), Some("09:00"));

        let untimed: SelectedDate = serde_json::from_str(r#"{"day":"2024-06-01"}"#).unwrap();
        assert_eq!(untimed.time(), None);

        let inverted = serde_json::from_str::<SelectedDate>(
            r#"{"day":"2024-06-01","time":{"start":"10:00:00","end":"09:00:00"}}"#,
        );
        assert!(inverted.is_err());
    }
}

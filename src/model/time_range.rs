// File: ./src/model/time_range.rs
use crate::error::SelectionError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A confirmed time-of-day range. `start` is always strictly before `end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, SelectionError> {
        if start >= end {
            return Err(SelectionError::InvalidTimeRange);
        }
        Ok(Self { start, end })
    }

    /// Accepts the raw output of a time picker where either bound may be unset.
    pub fn from_bounds(
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    ) -> Result<Self, SelectionError> {
        match (start, end) {
            (Some(s), Some(e)) => Self::new(s, e),
            _ => Err(SelectionError::InvalidTimeRange),
        }
    }

    /// Parses `"HH:MM"` bounds. Unparseable input counts as a missing bound.
    pub fn parse(start: &str, end: &str) -> Result<Self, SelectionError> {
        Self::from_bounds(parse_hm(start), parse_hm(end))
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn start_text(&self) -> String {
        format_hm(self.start)
    }

    pub fn end_text(&self) -> String {
        format_hm(self.end)
    }
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = SelectionError;

    fn try_from(raw: RawTimeRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}～{}", self.start_text(), self.end_text())
    }
}

pub fn format_hm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn parse_hm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn renders_zero_padded_range() {
        let r = TimeRange::new(hm(9, 0), hm(10, 30)).unwrap();
        assert_eq!(r.to_string(), "09:00～10:30");
        assert_eq!(r.start_text(), "09:00");
        assert_eq!(r.end_text(), "10:30");
    }

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        assert_eq!(
            TimeRange::new(hm(10, 0), hm(10, 0)),
            Err(SelectionError::InvalidTimeRange)
        );
        assert_eq!(
            TimeRange::new(hm(11, 0), hm(10, 0)),
            Err(SelectionError::InvalidTimeRange)
        );
    }

    #[test]
    fn missing_bound_is_invalid() {
        assert_eq!(
            TimeRange::from_bounds(Some(hm(9, 0)), None),
            Err(SelectionError::InvalidTimeRange)
        );
        assert_eq!(
            TimeRange::parse("9:00", "later"),
            Err(SelectionError::InvalidTimeRange)
        );
        assert!(TimeRange::parse("9:00", "17:15").is_ok());
    }

    #[test]
    fn deserializing_checks_the_order() {
        let ok: TimeRange =
            serde_json::from_str(r#"{"start":"09:00:00","end":"10:30:00"}"#).unwrap();
        assert_eq!(ok.to_string(), "09:00～10:30");

        let inverted = serde_json::from_str::<TimeRange>(r#"{"start":"10:00:00","end":"09:00:00"}"#);
        assert!(inverted.is_err());
    }
}

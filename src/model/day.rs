// File: ./src/model/day.rs
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short Japanese weekday names, Sunday first.
pub const WEEKDAYS_JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// A calendar day with no time-of-day component.
///
/// This is the identity key of a selected date. Two timestamps that fall on the
/// same local day produce equal `Day`s, so picking the same day twice collides
/// no matter which instant the picker reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Day(NaiveDate);

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Truncates a zoned timestamp to the local calendar day it falls on.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.with_timezone(&Local).date_naive())
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn weekday_ja(&self) -> &'static str {
        WEEKDAYS_JA[self.0.weekday().num_days_from_sunday() as usize]
    }

    /// `6月1日（土）`
    pub fn format_ja(&self) -> String {
        format!(
            "{}月{}日（{}）",
            self.0.month(),
            self.0.day(),
            self.weekday_ja()
        )
    }

    pub fn succ(&self) -> Self {
        self.0.succ_opt().map(Self).unwrap_or(*self)
    }

    pub fn pred(&self) -> Self {
        self.0.pred_opt().map(Self).unwrap_or(*self)
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Day {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map(Self)
    }
}

// File: ./src/calendar.rs
//! Read-only access to the device calendar.
//!
//! Events are fetched for a fixed window starting today and running one month
//! forward. They are shown for reference while picking dates and never enter
//! the selection list.
use crate::error::CalendarError;
use crate::model::Day;
use crate::notice::Notice;
use chrono::{DateTime, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Utc};
use icalendar::{Calendar, CalendarComponent, Component};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    AllDay(NaiveDate),
    At(DateTime<Local>),
}

impl EventTime {
    pub fn day(&self) -> Day {
        match self {
            EventTime::AllDay(d) => Day::new(*d),
            EventTime::At(dt) => Day::from_datetime(dt),
        }
    }

    /// Sort key: all-day events come first within their day.
    fn sort_key(&self) -> (Day, Option<chrono::NaiveTime>) {
        match self {
            EventTime::AllDay(d) => (Day::new(*d), None),
            EventTime::At(dt) => (Day::from_datetime(dt), Some(dt.time())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub summary: String,
    pub start: EventTime,
    pub end: Option<EventTime>,
}

impl CalendarEvent {
    /// `6月1日（土） 10:00 Dentist`
    pub fn label(&self) -> String {
        match &self.start {
            EventTime::AllDay(d) => format!("{} {}", Day::new(*d).format_ja(), self.summary),
            EventTime::At(dt) => format!(
                "{} {} {}",
                Day::from_datetime(dt).format_ja(),
                dt.format("%H:%M"),
                self.summary
            ),
        }
    }

    /// Every day the event covers inside `window`, in order.
    pub fn days_within(&self, window: &FetchWindow) -> Vec<Day> {
        let last = self.last_day();
        let mut day = self.start.day().max(window.start);
        let mut days = Vec::new();
        while day <= last && day < window.end {
            days.push(day);
            let next = day.succ();
            if next == day {
                break;
            }
            day = next;
        }
        days
    }

    fn last_day(&self) -> Day {
        match self.end {
            // DTEND of an all-day event is exclusive.
            Some(EventTime::AllDay(d)) => Day::new(d).pred().max(self.start.day()),
            Some(EventTime::At(dt)) => Day::from_datetime(&dt),
            None => self.start.day(),
        }
    }
}

/// Half-open range of days `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub start: Day,
    pub end: Day,
}

impl FetchWindow {
    pub fn one_month_from(today: Day) -> Self {
        let end = today
            .date()
            .checked_add_months(Months::new(1))
            .map(Day::new)
            .unwrap_or(today);
        Self { start: today, end }
    }

    pub fn overlaps(&self, event: &CalendarEvent) -> bool {
        event.start.day() < self.end && event.last_day() >= self.start
    }
}

pub trait CalendarSource: Send + Sync {
    /// Asks for read access. Refusal is final for this request.
    fn request_access(&self) -> Result<(), CalendarError>;

    fn fetch_events(&self, window: &FetchWindow) -> Result<Vec<CalendarEvent>, CalendarError>;
}

/// A calendar exported to an `.ics` file on the device.
#[derive(Debug, Clone)]
pub struct IcsCalendarSource {
    path: PathBuf,
    access_granted: bool,
}

impl IcsCalendarSource {
    pub fn new(path: impl Into<PathBuf>, access_granted: bool) -> Self {
        Self {
            path: path.into(),
            access_granted,
        }
    }
}

impl CalendarSource for IcsCalendarSource {
    fn request_access(&self) -> Result<(), CalendarError> {
        if self.access_granted {
            Ok(())
        } else {
            Err(CalendarError::PermissionDenied)
        }
    }

    fn fetch_events(&self, window: &FetchWindow) -> Result<Vec<CalendarEvent>, CalendarError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => CalendarError::PermissionDenied,
            _ => CalendarError::Fetch(format!("{}: {}", self.path.display(), e)),
        })?;
        let events = parse_events(&contents)?;
        Ok(events.into_iter().filter(|e| window.overlaps(e)).collect())
    }
}

fn parse_event_time(val: &str) -> Option<EventTime> {
    let val = val.trim();
    if val.len() == 8 {
        return NaiveDate::parse_from_str(val, "%Y%m%d")
            .ok()
            .map(EventTime::AllDay);
    }
    if let Some(utc) = val.strip_suffix('Z') {
        return NaiveDateTime::parse_from_str(utc, "%Y%m%dT%H%M%S")
            .ok()
            .map(|dt| EventTime::At(Utc.from_utc_datetime(&dt).with_timezone(&Local)));
    }
    // Floating or TZID-qualified times are read as device-local.
    NaiveDateTime::parse_from_str(val, "%Y%m%dT%H%M%S")
        .ok()
        .and_then(|dt| Local.from_local_datetime(&dt).earliest())
        .map(EventTime::At)
}

/// Extracts every VEVENT with a readable DTSTART.
pub fn parse_events(ics: &str) -> Result<Vec<CalendarEvent>, CalendarError> {
    let calendar: Calendar = ics
        .parse()
        .map_err(|e| CalendarError::Fetch(format!("Parse: {}", e)))?;

    let mut events = Vec::new();
    for component in &calendar.components {
        let CalendarComponent::Event(ev) = component else {
            continue;
        };
        let Some(start) = ev
            .properties()
            .get("DTSTART")
            .and_then(|p| parse_event_time(p.value()))
        else {
            log::debug!("Skipping event without a usable DTSTART");
            continue;
        };
        let end = ev
            .properties()
            .get("DTEND")
            .and_then(|p| parse_event_time(p.value()));
        events.push(CalendarEvent {
            summary: ev.get_summary().unwrap_or("No Title").to_string(),
            start,
            end,
        });
    }
    Ok(events)
}

/// Requests access, then fetches the next month of events sorted by start.
pub fn load_upcoming(
    source: &dyn CalendarSource,
    today: Day,
) -> Result<Vec<CalendarEvent>, CalendarError> {
    source.request_access()?;
    let window = FetchWindow::one_month_from(today);
    let mut events = source.fetch_events(&window)?;
    events.sort_by_key(|e| e.start.sort_key());
    log::info!(
        "Loaded {} calendar events between {} and {}",
        events.len(),
        window.start,
        window.end
    );
    Ok(events)
}

/// The notice to show for a finished fetch, if any. A non-empty listing needs
/// no notice; it is displayed directly.
pub fn listing_notice(result: &Result<Vec<CalendarEvent>, CalendarError>) -> Option<Notice> {
    match result {
        Ok(events) if events.is_empty() => Some(Notice::calendar_empty()),
        Ok(_) => None,
        Err(e) => Some(Notice::from(e)),
    }
}

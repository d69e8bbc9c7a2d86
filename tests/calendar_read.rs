// Tests for the read-only device calendar listing.
use nittei::calendar::{self, CalendarSource, IcsCalendarSource};
use nittei::context::{AppContext, TestContext};
use nittei::error::CalendarError;
use nittei::model::Day;
use std::fs;

const ICS: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:1\r\n\
SUMMARY:Review\r\n\
DTSTART:20240620T090000Z\r\n\
DTEND:20240620T100000Z\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:2\r\n\
SUMMARY:Trip\r\n\
DTSTART;VALUE=DATE:20240528\r\n\
DTEND;VALUE=DATE:20240603\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:3\r\n\
SUMMARY:Last year\r\n\
DTSTART;VALUE=DATE:20230601\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

fn write_calendar(ctx: &TestContext) -> std::path::PathBuf {
    let path = ctx.get_cache_dir().unwrap().join("device.ics");
    fs::write(&path, ICS).unwrap();
    path
}

#[test]
fn reads_events_overlapping_the_next_month() {
    let ctx = TestContext::new();
    let source = IcsCalendarSource::new(write_calendar(&ctx), true);
    let today: Day = "2024-06-01".parse().unwrap();

    let events = calendar::load_upcoming(&source, today).unwrap();
    let names: Vec<_> = events.iter().map(|e| e.summary.as_str()).collect();
    // The trip started before today but is still running.
    assert_eq!(names, vec!["Trip", "Review"]);
    assert!(calendar::listing_notice(&Ok(events)).is_none());
}

#[test]
fn withheld_permission_is_reported() {
    let ctx = TestContext::new();
    let source = IcsCalendarSource::new(write_calendar(&ctx), false);
    assert_eq!(source.request_access(), Err(CalendarError::PermissionDenied));

    let result = calendar::load_upcoming(&source, "2024-06-01".parse().unwrap());
    assert_eq!(result, Err(CalendarError::PermissionDenied));
    assert!(calendar::listing_notice(&result).unwrap().is_error());
}

#[test]
fn quiet_month_gets_the_empty_notice() {
    let ctx = TestContext::new();
    let source = IcsCalendarSource::new(write_calendar(&ctx), true);
    let result = calendar::load_upcoming(&source, "2025-01-01".parse().unwrap());
    assert_eq!(result, Ok(vec![]));
    let notice = calendar::listing_notice(&result).unwrap();
    assert!(!notice.is_error());
}

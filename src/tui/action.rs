// Defines actions and events exchanged between the UI loop and the worker.
use crate::calendar::CalendarEvent;
use crate::error::CalendarError;

#[derive(Debug)]
pub enum Action {
    FetchCalendar,
    Quit,
}

#[derive(Debug)]
pub enum AppEvent {
    CalendarLoaded(Result<Vec<CalendarEvent>, CalendarError>),
}

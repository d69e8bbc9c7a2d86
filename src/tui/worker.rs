// File: ./src/tui/worker.rs
// Background actor for the slow, fire-and-forget reads behind the UI loop.
use crate::calendar::{self, CalendarSource};
use crate::error::CalendarError;
use crate::model::Day;
use crate::tui::action::{Action, AppEvent};
use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender};

pub async fn run_worker(
    source: Option<Arc<dyn CalendarSource>>,
    mut action_rx: Receiver<Action>,
    event_tx: Sender<AppEvent>,
) {
    while let Some(action) = action_rx.recv().await {
        match action {
            Action::FetchCalendar => {
                let result = match &source {
                    Some(src) => {
                        let src = src.clone();
                        let today = Day::today();
                        tokio::task::spawn_blocking(move || {
                            calendar::load_upcoming(src.as_ref(), today)
                        })
                        .await
                        .unwrap_or_else(|e| Err(CalendarError::Fetch(e.to_string())))
                    }
                    None => Err(CalendarError::Fetch(
                        "no calendar_file configured".to_string(),
                    )),
                };
                if let Err(e) = &result {
                    log::warn!("Calendar fetch failed: {}", e);
                }
                let _ = event_tx.send(AppEvent::CalendarLoaded(result)).await;
            }
            Action::Quit => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarEvent, EventTime, FetchWindow};
    use tokio::sync::mpsc;

    struct OneEvent;

    impl CalendarSource for OneEvent {
        fn request_access(&self) -> Result<(), CalendarError> {
            Ok(())
        }

        fn fetch_events(&self, window: &FetchWindow) -> Result<Vec<CalendarEvent>, CalendarError> {
            Ok(vec![CalendarEvent {
                summary: "Standup".to_string(),
                start: EventTime::AllDay(window.start.date()),
                end: None,
            }])
        }
    }

    #[tokio::test]
    async fn fetch_reports_a_single_event() {
        let (action_tx, action_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let handle = tokio::spawn(run_worker(Some(Arc::new(OneEvent)), action_rx, event_tx));

        action_tx.send(Action::FetchCalendar).await.unwrap();
        let AppEvent::CalendarLoaded(result) = event_rx.recv().await.unwrap();
        assert_eq!(result.unwrap()[0].summary, "Standup");

        action_tx.send(Action::Quit).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn missing_source_is_a_fetch_error() {
        let (action_tx, action_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::channel(4);
        tokio::spawn(run_worker(None, action_rx, event_tx));

        action_tx.send(Action::FetchCalendar).await.unwrap();
        let AppEvent::CalendarLoaded(result) = event_rx.recv().await.unwrap();
        assert!(matches!(result, Err(CalendarError::Fetch(_))));
    }
}

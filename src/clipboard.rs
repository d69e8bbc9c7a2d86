// File: ./src/clipboard.rs
//! Clipboard sinks and the copy action.
use crate::error::ClipboardError;
use crate::model::SelectionList;
use crate::notice::Notice;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::Write;

/// Anything that can take the exported text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Terminal clipboard via the OSC 52 escape sequence.
///
/// The terminal emulator owns the actual clipboard, so a successful write only
/// means the sequence reached the terminal.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// In-process clipboard for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("clipboard unavailable".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Exports the list into `sink` and reports the outcome.
///
/// Returns `None` without touching the sink when there is nothing to copy;
/// frontends hide the copy action in that case.
pub fn copy_selection(list: &SelectionList, sink: &mut dyn ClipboardSink) -> Option<Notice> {
    if list.is_empty() {
        return None;
    }
    let text = list.export_text();
    match sink.write_text(&text) {
        Ok(()) => {
            log::info!("Copied {} dates to clipboard", list.len());
            Some(Notice::copied())
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {}", e);
            Some(Notice::from(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Day;
    use crate::notice::NoticeKind;

    fn list_with(days: &[&str]) -> SelectionList {
        let mut list = SelectionList::new(true, false);
        for d in days {
            list.add_date(d.parse::<Day>().unwrap(), None).unwrap();
        }
        list
    }

    #[test]
    fn osc52_payload_is_base64() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn osc52_writes_to_the_terminal_stream() {
        let mut clip = Osc52Clipboard::new(Vec::new());
        clip.write_text("6月1日（土）").unwrap();
        let written = String::from_utf8(clip.into_inner()).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
    }

    #[test]
    fn empty_list_is_not_copied() {
        let mut clip = MemoryClipboard::default();
        assert_eq!(copy_selection(&SelectionList::default(), &mut clip), None);
        assert_eq!(clip.contents, None);
    }

    #[test]
    fn copy_reports_success_and_failure() {
        let list = list_with(&["2024-06-01", "2024-06-03"]);
        let mut clip = MemoryClipboard::default();
        let notice = copy_selection(&list, &mut clip).unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(
            clip.contents.as_deref(),
            Some("第1希望：6月1日（土）\n第2希望：6月3日（月）")
        );

        let mut broken = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let notice = copy_selection(&list, &mut broken).unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
    }
}

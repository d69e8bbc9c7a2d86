// File: ./src/model/display.rs
use crate::model::day::Day;
use crate::model::entry::SelectedDate;
use serde::Serialize;

/// Which optional parts of an entry are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    pub priority: bool,
    pub time: bool,
}

/// One rendered line of the selection list, keyed by its day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub key: Day,
    /// 1-based preference rank, present only in priority mode.
    pub rank: Option<usize>,
    pub text: String,
}

/// `第1希望：`
pub fn priority_label(rank: usize) -> String {
    format!("第{}希望：", rank)
}

/// Renders one entry at `index` (0-based) in the ordered list.
pub fn display_text(entry: &SelectedDate, index: usize, flags: DisplayFlags) -> String {
    let mut s = String::new();
    if flags.priority {
        s.push_str(&priority_label(index + 1));
    }
    s.push_str(&entry.day().format_ja());
    if flags.time
        && let Some(range) = entry.time()
    {
        s.push_str(&range.to_string());
    }
    s
}

/// Projects the whole ordered list. Rank text depends on position, so this is
/// always applied to every entry at once.
pub fn project(entries: &[SelectedDate], flags: DisplayFlags) -> Vec<DisplayRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| DisplayRow {
            key: e.day(),
            rank: flags.priority.then_some(i + 1),
            text: display_text(e, i, flags),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeRange;

    fn day(s: &str) -> Day {
        s.parse().unwrap()
    }

    #[test]
    fn label_date_and_time_concatenate_without_separators() {
        let range = TimeRange::parse("09:00", "10:30").unwrap();
        let e = SelectedDate::with_time(day("2024-06-01"), range);
        let flags = DisplayFlags {
            priority: true,
            time: true,
        };
        assert_eq!(display_text(&e, 2, flags), "第3希望：6月1日（土）09:00～10:30");
    }

    #[test]
    fn time_is_hidden_when_flag_is_off() {
        let range = TimeRange::parse("09:00", "10:30").unwrap();
        let e = SelectedDate::with_time(day("2024-06-01"), range);
        let flags = DisplayFlags {
            priority: false,
            time: false,
        };
        assert_eq!(display_text(&e, 0, flags), "6月1日（土）");
    }

    #[test]
    fn ranks_follow_position() {
        let entries = vec![
            SelectedDate::new(day("2024-06-05")),
            SelectedDate::new(day("2024-06-01")),
        ];
        let rows = project(
            &entries,
            DisplayFlags {
                priority: true,
                time: true,
            },
        );
        assert_eq!(rows[0].rank, Some(1));
        assert_eq!(rows[0].key, day("2024-06-05"));
        assert_eq!(rows[1].text, "第2希望：6月1日（土）");
    }
}

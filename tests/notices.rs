// Localized acknowledgements. The active locale is process-wide, hence serial.
use nittei::clipboard::{self, MemoryClipboard};
use nittei::error::SelectionError;
use nittei::model::{Day, SelectionList};
use nittei::notice::{Notice, NoticeKind};
use serial_test::serial;

fn picked(days: &[&str]) -> SelectionList {
    let mut list = SelectionList::new(true, false);
    for d in days {
        list.add_date(d.parse().unwrap(), None).unwrap();
    }
    list
}

#[test]
#[serial]
fn japanese_alerts() {
    nittei::locale::init(Some("ja-JP"));
    let day: Day = "2024-06-01".parse().unwrap();

    let dup = Notice::from(&SelectionError::DuplicateDate(day));
    assert_eq!(dup.title, "重複");
    assert_eq!(dup.body, "この日付は既に選択されています");

    let bad = Notice::from(&SelectionError::InvalidTimeRange);
    assert_eq!(bad.title, "エラー");
    assert_eq!(bad.body, "正しい開始時間と終了時間を選択してください");
    assert_eq!(bad.kind, NoticeKind::Error);

    assert_eq!(Notice::copied().title, "コピー完了");
}

#[test]
#[serial]
fn english_fallback_for_unknown_locales() {
    assert_eq!(nittei::locale::init(Some("fr-FR")), "en");
    let n = Notice::from(&SelectionError::InvalidTimeRange);
    assert_ne!(n.body, "正しい開始時間と終了時間を選択してください");
    assert!(!n.body.is_empty());
}

#[test]
#[serial]
fn copy_reports_success_and_failure() {
    nittei::locale::init(Some("ja"));
    let list = picked(&["2024-06-01", "2024-06-03"]);

    let mut ok = MemoryClipboard::default();
    let notice = clipboard::copy_selection(&list, &mut ok).unwrap();
    assert_eq!(notice, Notice::copied());
    assert_eq!(
        ok.contents.as_deref(),
        Some("第1希望：6月1日（土）\n第2希望：6月3日（月）")
    );

    let mut broken = MemoryClipboard {
        fail: true,
        ..Default::default()
    };
    let notice = clipboard::copy_selection(&list, &mut broken).unwrap();
    assert_eq!(notice, Notice::copy_failed());
    assert!(notice.is_error());
}

#[test]
#[serial]
fn empty_list_suppresses_copy() {
    let mut clip = MemoryClipboard::default();
    assert_eq!(clipboard::copy_selection(&SelectionList::default(), &mut clip), None);
    assert_eq!(clip.contents, None);
}

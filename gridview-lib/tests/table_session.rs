//! End-to-end command sequences through a TableSession.

use std::cell::RefCell;
use std::rc::Rc;

use gridview_lib::TableConfig;
use gridview_lib::TableSession;
use gridview_lib::TableView;
use gridview_lib::error::DatasetError;
use gridview_lib::error::EditError;
use gridview_lib::model::RawRecord;
use gridview_lib::model::Value;
use gridview_lib::table::SortIndicator;

fn store_records() -> Vec<RawRecord> {
    serde_json::from_str(
        r#"[
            {"name": "Appstore", "storeRanking": 5, "activeDailyUsers": 1000000, "founder": "Ada", "location": "CA"},
            {"name": "Playstore", "storeRanking": 2, "activeDailyUsers": 2500000, "founder": "Grace", "location": "NY"},
            {"name": "Amazon", "storeRanking": 1, "activeDailyUsers": 900000, "founder": "Mary", "location": "WA"},
            {"name": "Steam", "storeRanking": 4, "activeDailyUsers": 1200000, "founder": "Lin", "location": "WA"},
            {"name": "Itch", "storeRanking": 3, "activeDailyUsers": 50000, "founder": "Sol", "location": "OR"}
        ]"#,
    )
    .unwrap()
}

fn numbered_records(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "name": format!("row{i:02}"),
                "storeRanking": i + 1,
            }))
            .unwrap()
        })
        .collect()
}

/// Builds a session that records every rendered view.
fn session_with_log(records: Vec<RawRecord>) -> (TableSession, Rc<RefCell<Vec<TableView>>>) {
    let log: Rc<RefCell<Vec<TableView>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let session = TableSession::new(
        records,
        TableConfig::default(),
        Box::new(move |view| sink.borrow_mut().push(view.clone())),
    )
    .unwrap();
    (session, log)
}

fn names(view: &TableView) -> Vec<String> {
    view.rows
        .iter()
        .map(|row| row.cells[0].to_string())
        .collect()
}

#[test]
fn test_load_derives_columns_and_sorts() {
    let (session, log) = session_with_log(store_records());

    let view = session.view();
    let labels: Vec<&str> = view.columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Name",
            "Store Ranking",
            "Active Daily Users",
            "Founder",
            "Location"
        ]
    );

    // Initial order: storeRanking ascending
    assert_eq!(
        names(&view),
        vec!["Amazon", "Playstore", "Itch", "Steam", "Appstore"]
    );
    assert_eq!(view.columns[1].sort, SortIndicator::Ascending);

    // The load itself rendered once
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_empty_dataset_is_fatal() {
    let result = TableSession::new(Vec::new(), TableConfig::default(), Box::new(|_| {}));
    assert!(matches!(result, Err(DatasetError::Empty)));
}

#[test]
fn test_sort_toggle_flips_direction() {
    let (mut session, log) = session_with_log(store_records());

    session.sort_by_column(1);
    let view = session.view();
    assert_eq!(view.columns[1].sort, SortIndicator::Descending);
    assert_eq!(
        names(&view),
        vec!["Appstore", "Steam", "Itch", "Playstore", "Amazon"]
    );

    session.sort_by_column(0);
    let view = session.view();
    assert_eq!(view.columns[0].sort, SortIndicator::Ascending);
    assert_eq!(view.columns[1].sort, SortIndicator::None);
    assert_eq!(
        names(&view),
        vec!["Amazon", "Appstore", "Itch", "Playstore", "Steam"]
    );

    // load + two sorts
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn test_sort_resets_page() {
    let (mut session, _log) = session_with_log(numbered_records(23));
    session.change_page(3);
    assert_eq!(session.current_page(), 3);

    session.sort_by_column(0);
    assert_eq!(session.current_page(), 1);
}

#[test]
fn test_search_narrows_and_clear_restores_canonical_order() {
    let (mut session, _log) = session_with_log(store_records());

    session.sort_by_column(0); // name ascending
    let before: Vec<String> = names(&session.view());

    session.submit_search("store");
    let view = session.view();
    assert_eq!(names(&view), vec!["Appstore", "Playstore"]);
    assert_eq!(view.filter.as_deref(), Some("store"));
    assert!(!view.no_results);

    session.clear_search();
    let view = session.view();
    assert!(view.filter.is_none());
    assert_eq!(names(&view), before);
}

#[test]
fn test_search_matches_hidden_columns() {
    let (mut session, _log) = session_with_log(store_records());

    // Hide the founder column, then search for a founder name
    session.hide_column(3);
    session.submit_search("grace");
    assert_eq!(names(&session.view()), vec!["Playstore"]);
}

#[test]
fn test_search_with_no_matches_flags_no_results() {
    let (mut session, _log) = session_with_log(store_records());

    session.submit_search("zzz");
    let view = session.view();
    assert!(view.no_results);
    assert!(view.rows.is_empty());
    assert!(view.pages.is_empty());
}

#[test]
fn test_blank_search_clears_filter() {
    let (mut session, _log) = session_with_log(store_records());

    session.submit_search("store");
    session.submit_search("   ");
    let view = session.view();
    assert!(view.filter.is_none());
    assert_eq!(view.rows.len(), 5);
}

#[test]
fn test_sort_under_filter_leaves_canonical_order_alone() {
    let (mut session, _log) = session_with_log(store_records());
    let canonical = names(&session.view());

    session.submit_search("store");
    session.sort_by_column(0);
    assert_eq!(names(&session.view()), vec!["Appstore", "Playstore"]);

    session.clear_search();
    assert_eq!(names(&session.view()), canonical);
}

#[test]
fn test_pagination_over_23_rows() {
    let (mut session, _log) = session_with_log(numbered_records(23));

    let view = session.view();
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.rows.len(), 10);

    session.change_page(3);
    let view = session.view();
    assert_eq!(view.rows.len(), 3);
    let window: Vec<usize> = view.pages.iter().map(|b| b.number).collect();
    assert_eq!(window, vec![1, 2, 3]);
    assert!(view.pages[2].current);

    // Out-of-range page is "no rows", not an error
    session.change_page(4);
    assert!(session.view().rows.is_empty());
}

#[test]
fn test_search_resets_page_but_clear_keeps_it() {
    let (mut session, _log) = session_with_log(numbered_records(23));

    session.change_page(3);
    session.submit_search("row");
    assert_eq!(session.current_page(), 1);

    session.change_page(2);
    session.clear_search();
    assert_eq!(session.current_page(), 2);
}

#[test]
fn test_hide_and_unhide_column() {
    let (mut session, _log) = session_with_log(store_records());

    session.hide_column(1);
    let view = session.view();
    assert!(!view.columns[1].visible);
    assert_eq!(view.hidden_labels, vec!["Store Ranking"]);
    // Hidden column data is still present in the view rows
    assert_eq!(view.rows[0].cells.len(), 5);
    // And it remains the sort criterion
    assert_eq!(view.columns[1].sort, SortIndicator::Ascending);

    session.unhide_column(1);
    let view = session.view();
    assert!(view.columns[1].visible);
    assert!(view.hidden_labels.is_empty());
    assert_eq!(view.columns[1].index, 1);
}

#[test]
fn test_edit_commit_updates_single_cell() {
    let (mut session, log) = session_with_log(store_records());

    let view = session.view();
    let target = view.rows[0].id; // Amazon after the initial sort
    let before = view.rows[0].cells.clone();

    session.begin_edit(target, 3).unwrap();
    assert_eq!(
        session.editing().unwrap().original_value(),
        &Value::from("Mary")
    );
    session.commit_edit(Value::from("New Name")).unwrap();

    let view = session.view();
    assert_eq!(view.rows[0].cells[3], Value::from("New Name"));
    for (index, cell) in view.rows[0].cells.iter().enumerate() {
        if index != 3 {
            assert_eq!(cell, &before[index]);
        }
    }

    // Session is destroyed by the commit; the commit re-rendered
    assert!(session.editing().is_none());
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_edit_visible_through_active_filter() {
    let (mut session, _log) = session_with_log(store_records());

    session.submit_search("appstore");
    let target = session.view().rows[0].id;

    session.begin_edit(target, 4).unwrap();
    session.commit_edit(Value::from("TX")).unwrap();

    // The filtered view shows the edit immediately
    assert_eq!(session.view().rows[0].cells[4], Value::from("TX"));

    // And so does the unfiltered view afterwards
    session.clear_search();
    let view = session.view();
    let edited = view.rows.iter().find(|row| row.id == target).unwrap();
    assert_eq!(edited.cells[4], Value::from("TX"));
}

#[test]
fn test_second_edit_rejected_while_open() {
    let (mut session, _log) = session_with_log(store_records());

    let view = session.view();
    let first = view.rows[0].id;
    let second = view.rows[1].id;

    session.begin_edit(first, 0).unwrap();
    assert!(matches!(
        session.begin_edit(second, 0),
        Err(EditError::InProgress { .. })
    ));

    // Committing frees the slot
    session.commit_edit(Value::from("renamed")).unwrap();
    session.begin_edit(second, 0).unwrap();
    session.commit_edit(Value::from("also renamed")).unwrap();
}

#[test]
fn test_commit_without_session_rejected() {
    let (mut session, _log) = session_with_log(store_records());
    assert!(matches!(
        session.commit_edit(Value::from("x")),
        Err(EditError::NoSession)
    ));
}

#[test]
fn test_every_command_renders() {
    let (mut session, log) = session_with_log(store_records());

    session.sort_by_column(0);
    session.submit_search("store");
    session.change_page(1);
    session.hide_column(2);
    session.unhide_column(2);
    session.clear_search();

    // load + 6 commands
    assert_eq!(log.borrow().len(), 7);
}

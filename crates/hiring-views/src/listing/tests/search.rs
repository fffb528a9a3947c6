use super::common::*;
use crate::listing::{ListViewError, Record, ALL};

#[test]
fn empty_search_keeps_everything() {
    let list = controller(numbered(4));
    assert_eq!(list.filtered_and_sorted().len(), 4);
}

#[test]
fn search_is_case_insensitive_substring() {
    let list_records = vec![
        Record::new().with("name", "Amy Lee"),
        Record::new().with("name", "Bob Cid"),
    ];
    let mut list = controller(list_records);
    list.set_search_term("amy");
    assert_eq!(names(&list.filtered_and_sorted()), ["Amy Lee"]);

    list.set_search_term("LEE");
    assert_eq!(names(&list.filtered_and_sorted()), ["Amy Lee"]);
}

#[test]
fn search_skips_missing_fields_and_checks_every_searched_field() {
    let records = vec![
        Record::new().with("name", "Amy").with("email", "amy@example.com"),
        Record::new().with("name", "Bob"),
        Record::new().with("name", "Cid").with("email", None::<&str>),
    ];
    let mut list = controller(records);
    list.set_search_term("example");
    assert_eq!(names(&list.filtered_and_sorted()), ["Amy"]);
}

#[test]
fn search_term_is_not_trimmed() {
    let mut list = controller(vec![Record::new().with("name", "Amy Lee")]);
    list.set_search_term(" amy");
    assert!(list.filtered_and_sorted().is_empty());
    assert_eq!(list.search_term(), " amy");
}

#[test]
fn filters_and_search_combine() {
    let mut list = controller(numbered(10));
    list.set_filter("team", "core").expect("team filter exists");
    list.set_filter("level", "senior").expect("level filter exists");

    let rows = list.filtered_and_sorted();
    assert_eq!(names(&rows), ["row-04", "row-06", "row-08"]);

    list.set_search_term("08");
    assert_eq!(names(&list.filtered_and_sorted()), ["row-08"]);
}

#[test]
fn results_satisfy_predicates_and_never_grow() {
    let records = numbered(25);
    let mut list = controller(records.clone());
    list.set_filter("team", "infra").expect("team filter exists");
    list.set_search_term("1");

    let rows = list.filtered_and_sorted();
    assert!(rows.len() <= records.len());
    for row in rows {
        assert_eq!(row.text("team").as_deref(), Some("infra"));
        assert!(row.text("name").unwrap_or_default().contains('1'));
    }
}

#[test]
fn set_filter_is_idempotent() {
    let mut once = controller(numbered(12));
    once.set_filter("level", "junior").expect("level filter exists");

    let mut twice = controller(numbered(12));
    twice.set_filter("level", "junior").expect("level filter exists");
    twice.set_filter("level", "junior").expect("level filter exists");

    assert_eq!(
        names(&once.filtered_and_sorted()),
        names(&twice.filtered_and_sorted())
    );
}

#[test]
fn unknown_filter_is_rejected_without_side_effects() {
    let mut list = controller(numbered(3));
    let err = list.set_filter("country", "local").unwrap_err();
    assert_eq!(err, ListViewError::UnknownFilter("country".to_string()));
    assert_eq!(list.filtered_and_sorted().len(), 3);
    assert!(list.filter_value("country").is_none());
}

#[test]
fn reset_filters_restores_all() {
    let mut list = controller(numbered(6));
    list.set_search_term("row-0");
    list.set_filter("team", "core").expect("team filter exists");
    list.reset_filters();

    assert_eq!(list.search_term(), "");
    assert_eq!(list.filter_value("team"), Some(ALL));
    assert_eq!(list.filtered_and_sorted().len(), 6);
}

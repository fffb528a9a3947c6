use super::common::*;

#[test]
fn twelve_rows_make_two_pages() {
    let list = controller(numbered(12));
    assert_eq!(list.total_pages(), 2);
    assert_eq!(list.page_numbers(), [1, 2]);
    assert_eq!(list.current_page_slice().len(), 10);
}

#[test]
fn empty_list_has_no_pages() {
    let list = controller(Vec::new());
    assert_eq!(list.total_pages(), 0);
    assert!(list.page_numbers().is_empty());
    assert!(list.current_page_slice().is_empty());
}

#[test]
fn second_page_holds_the_remainder() {
    let mut list = controller(numbered(12));
    list.set_page(2);
    assert_eq!(list.start_index(), 10);
    assert_eq!(names(&list.current_page_slice()), ["row-10", "row-11"]);
}

#[test]
fn out_of_range_page_yields_empty_slice() {
    let mut list = controller(numbered(12));
    list.set_page(9);
    assert_eq!(list.current_page(), 9);
    assert!(list.current_page_slice().is_empty());
}

#[test]
fn window_slides_with_current_page() {
    let mut list = controller(numbered(95));
    assert_eq!(list.total_pages(), 10);
    list.set_page(6);
    assert_eq!(list.page_numbers(), [4, 5, 6, 7, 8]);
    list.set_page(10);
    assert_eq!(list.page_numbers(), [6, 7, 8, 9, 10]);
}

#[test]
fn narrowing_search_clamps_page_into_range() {
    let mut list = controller(numbered(30));
    list.set_page(3);
    list.set_search_term("row-1");
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.current_page_slice().len(), 10);
}

#[test]
fn search_keeps_page_while_still_reachable() {
    let mut list = controller(numbered(30));
    list.set_page(2);
    list.set_search_term("row");
    assert_eq!(list.current_page(), 2);
}

#[test]
fn narrowing_filter_clamps_page_into_range() {
    let mut list = controller(numbered(30));
    list.set_page(3);
    list.set_filter("team", "core").expect("team filter exists");
    assert_eq!(list.total_pages(), 2);
    assert_eq!(list.current_page(), 2);
}

#[test]
fn page_view_reports_display_range() {
    let mut list = controller(numbered(12));
    list.set_page(2);
    let view = list.page_view();
    assert_eq!(view.total_items, 12);
    assert_eq!(view.total_pages, 2);
    assert_eq!((view.showing_from, view.showing_to), (11, 12));
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.filters.get("team").map(String::as_str), Some("all"));

    list.set_search_term("nothing matches");
    let view = list.page_view();
    assert!(view.is_empty());
    assert_eq!((view.showing_from, view.showing_to), (0, 0));
}

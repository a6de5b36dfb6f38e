use catalog_table_wasm::domain::catalog::PageState;
use quickcheck_macros::quickcheck;

#[test]
fn total_pages_is_ceiling_division() {
    let mut page = PageState::new(10);
    assert_eq!(page.total_pages(), 0);
    page.set_total_items(47);
    assert_eq!(page.total_pages(), 5);
    page.set_total_items(50);
    assert_eq!(page.total_pages(), 5);
    page.set_total_items(51);
    assert_eq!(page.total_pages(), 6);
    page.set_total_items(1);
    assert_eq!(page.total_pages(), 1);
}

#[test]
fn go_to_page_rejects_out_of_range_targets() {
    let mut page = PageState::new(10);
    page.set_total_items(47);

    assert!(!page.go_to_page(0));
    assert_eq!(page.current_page(), 1);
    assert!(!page.go_to_page(6));
    assert_eq!(page.current_page(), 1);

    assert!(page.go_to_page(5));
    assert_eq!(page.current_page(), 5);
    // same page is accepted but not a change
    assert!(!page.go_to_page(5));
}

#[test]
fn next_and_previous_move_exactly_one_page() {
    let mut page = PageState::new(10);
    page.set_total_items(25);

    assert!(!page.previous());
    assert!(page.next());
    assert_eq!(page.current_page(), 2);
    assert!(page.next());
    assert_eq!(page.current_page(), 3);
    assert!(!page.next());
    assert_eq!(page.current_page(), 3);
    assert!(page.previous());
    assert_eq!(page.current_page(), 2);
}

#[test]
fn shrinking_total_clamps_current_page() {
    let mut page = PageState::new(10);
    page.set_total_items(47);
    assert!(page.go_to_page(5));

    page.set_total_items(12);
    assert_eq!(page.total_pages(), 2);
    assert_eq!(page.current_page(), 2);

    page.set_total_items(0);
    assert_eq!(page.total_pages(), 0);
    assert_eq!(page.current_page(), 1);
}

#[test]
fn skip_matches_page_window() {
    let mut page = PageState::new(10);
    page.set_total_items(47);
    assert_eq!(page.skip(), 0);
    page.go_to_page(3);
    assert_eq!(page.skip(), 20);
}

#[quickcheck]
fn current_page_stays_in_range_after_any_resize(total: u32, target: u32, new_total: u32) -> bool {
    let mut page = PageState::new(10);
    page.set_total_items(total % 10_000);
    page.go_to_page(target % 10_000);
    page.set_total_items(new_total % 10_000);
    page.current_page() >= 1 && page.current_page() <= page.total_pages().max(1)
}

#[quickcheck]
fn total_pages_never_drops_items(total: u32) -> bool {
    let mut page = PageState::new(10);
    let total = total % 1_000_000;
    page.set_total_items(total);
    let pages = page.total_pages();
    pages * 10 >= total && (pages == 0 || (pages - 1) * 10 < total)
}

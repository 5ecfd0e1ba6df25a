use super::*;

#[test]
fn load_more_claims_pages_in_order_and_stops_at_total() {
    let mut list = LoadMoreList::<u32>::default();
    assert_eq!(list.begin_fetch(), Some(1));
    assert_eq!(list.begin_fetch(), None, "second fetch while pending");
    list.apply_page(vec![1, 2], 1, 2);

    assert_eq!(list.begin_fetch(), Some(2));
    list.apply_page(vec![3], 2, 2);

    assert!(list.is_exhausted());
    assert_eq!(list.begin_fetch(), None);
    assert_eq!(list.items, vec![1, 2, 3]);
}

#[test]
fn load_more_failure_allows_retry_of_same_page() {
    let mut list = LoadMoreList::<u32>::default();
    assert_eq!(list.begin_fetch(), Some(1));
    list.fail("offline".to_owned());
    assert_eq!(list.error.as_deref(), Some("offline"));
    assert_eq!(list.begin_fetch(), Some(1));
    assert_eq!(list.error, None);
}

#[test]
fn load_more_with_empty_catalogue_is_exhausted() {
    let mut list = LoadMoreList::<u32>::default();
    list.begin_fetch();
    list.apply_page(Vec::new(), 1, 0);
    assert!(list.is_exhausted());
}

#[test]
fn page_view_rejects_out_of_range_and_busy_loads() {
    let mut view = PageView::<u32>::default();
    assert_eq!(view.begin_load(0), None);
    assert_eq!(view.begin_load(2), None);
    let first = view.begin_load(1).unwrap();
    assert_eq!(first.page, 1);
    assert_eq!(view.begin_load(1), None);
    view.apply_page(first, vec![7], 1, 4);
    assert_eq!(view.begin_load(4).map(|t| t.page), Some(4));
}

#[test]
fn page_view_replaces_items() {
    let mut view = PageView::<u32>::default();
    let first = view.begin_load(1).unwrap();
    view.apply_page(first, vec![1, 2], 1, 3);
    let second = view.begin_load(2).unwrap();
    view.apply_page(second, vec![3], 2, 3);
    assert_eq!(view.items, vec![3]);
    assert_eq!(view.page, 2);
}

#[test]
fn page_view_drops_results_claimed_before_reset() {
    let mut view = PageView::<&str>::default();
    let talk = view.begin_load(1).unwrap();

    view.reset();
    let review = view.begin_load(1).unwrap();
    view.apply_page(review, vec!["review-article"], 1, 1);
    view.apply_page(talk, vec!["talk-article"], 1, 3);

    assert_eq!(view.items, vec!["review-article"]);
    assert_eq!(view.total_pages, 1);
    assert!(!view.is_current(talk));
}

#[test]
fn page_view_ignores_failure_from_before_reset() {
    let mut view = PageView::<u32>::default();
    let stale = view.begin_load(1).unwrap();
    view.reset();
    let fresh = view.begin_load(1).unwrap();

    view.fail(stale, "offline".to_owned());

    assert_eq!(view.error, None);
    assert!(view.loading);
    view.apply_page(fresh, vec![5], 1, 1);
    assert_eq!(view.items, vec![5]);
}

#[test]
fn reset_allows_a_new_load_while_the_old_one_is_in_flight() {
    let mut view = PageView::<u32>::default();
    view.begin_load(1).unwrap();
    assert_eq!(view.begin_load(1), None);
    view.reset();
    assert!(view.begin_load(1).is_some());
}

#[test]
fn latest_request_supersedes_earlier_ones() {
    let mut latest = LatestRequest::default();
    let first = latest.begin();
    let second = latest.begin();
    assert!(!latest.is_current(first));
    assert!(latest.is_current(second));
}

#[test]
fn page_window_centres_and_clamps() {
    assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(6, 10, 5), vec![4, 5, 6, 7, 8]);
    assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    assert_eq!(page_window(1, 0, 5), vec![1]);
}

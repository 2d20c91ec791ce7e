use super::PageControl::{Ellipsis, Number};
use super::*;

#[test]
fn single_page_renders_no_controls() {
    assert!(page_controls(1, 1).is_empty());
}

#[test]
fn zero_pages_renders_no_controls() {
    assert!(page_controls(1, 0).is_empty());
}

#[test]
fn small_totals_list_every_page() {
    assert_eq!(
        page_controls(2, 4),
        vec![Number(1), Number(2), Number(3), Number(4)]
    );
}

#[test]
fn middle_page_gets_ellipsis_on_both_sides() {
    assert_eq!(
        page_controls(5, 9),
        vec![Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(9)]
    );
}

#[test]
fn first_page_gets_trailing_ellipsis_only() {
    assert_eq!(
        page_controls(1, 9),
        vec![Number(1), Number(2), Ellipsis, Number(9)]
    );
}

#[test]
fn last_page_gets_leading_ellipsis_only() {
    assert_eq!(
        page_controls(9, 9),
        vec![Number(1), Ellipsis, Number(8), Number(9)]
    );
}

#[test]
fn adjacent_window_has_no_spurious_ellipsis() {
    // Window touches both ends: 1 2 3 4 5, current 3, total 5.
    assert_eq!(
        page_controls(3, 5),
        vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
    );
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(
        page_controls(99, 3),
        vec![Number(1), Number(2), Number(3)]
    );
}

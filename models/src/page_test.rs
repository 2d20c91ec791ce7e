use super::*;

#[test]
fn page_decodes_items_scheme() {
    let page: Page<String> = serde_json::from_str(
        r#"{"items": ["a", "b"], "pageIndex": 2, "pageSize": 2, "totalPages": 3, "totalCount": 6}"#,
    )
    .unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.page_index, 2);
    assert!(page.has_next());
}

#[test]
fn page_decodes_data_and_page_number_aliases() {
    let page: Page<i32> = serde_json::from_str(
        r#"{"data": [1], "pageNumber": 3, "totalPages": 3, "totalItems": 5}"#,
    )
    .unwrap();
    assert_eq!(page.items, vec![1]);
    assert_eq!(page.page_index, 3);
    assert_eq!(page.total_count, 5);
    assert!(!page.has_next());
}

#[test]
fn empty_page_defaults_to_first() {
    let page: Page<i32> = serde_json::from_str("{}").unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.page_index, 1);
    assert!(!page.has_next());
}

use super::*;

#[test]
fn month_path_includes_all_filters() {
    assert_eq!(month_path("t1", 2024, 3), "/event?treeId=t1&year=2024&month=3");
}

#[test]
fn event_path_formats_expected_endpoint() {
    assert_eq!(event_path("e7"), "/event/e7");
}

#[test]
fn new_event_serializes_recurring_flag() {
    let event = NewEvent {
        family_tree_id: "t1".to_owned(),
        title: "Giỗ tổ".to_owned(),
        description: None,
        location: Some("Nhà thờ họ".to_owned()),
        start_time: "2024-04-18T09:00:00Z".to_owned(),
        end_time: None,
        is_recurring: true,
    };
    let body = serde_json::to_value(&event).unwrap();
    assert_eq!(body["isRecurring"], true);
    assert!(body.get("endTime").is_none());
}

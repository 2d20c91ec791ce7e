use super::*;

#[test]
fn profile_update_skips_untouched_fields() {
    let update = ProfileUpdate {
        biography: Some("Đời thứ ba, con cụ Hai.".to_owned()),
        ..ProfileUpdate::default()
    };
    let body = serde_json::to_value(&update).unwrap();
    let map = body.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["biography"], "Đời thứ ba, con cụ Hai.");
}

#[test]
fn profile_update_serializes_camel_case() {
    let update = ProfileUpdate {
        full_name: Some("Lan".to_owned()),
        date_of_birth: Some("1990-01-01".to_owned()),
        ..ProfileUpdate::default()
    };
    let body = serde_json::to_value(&update).unwrap();
    assert!(body.get("fullName").is_some());
    assert!(body.get("dateOfBirth").is_some());
    assert!(body.get("full_name").is_none());
}

use serde_json::json;

use super::*;

#[test]
fn classification_covers_the_logged_codes() {
    assert_eq!(StatusClass::of(401), StatusClass::Unauthorized);
    assert_eq!(StatusClass::of(403), StatusClass::Forbidden);
    assert_eq!(StatusClass::of(404), StatusClass::NotFound);
    assert_eq!(StatusClass::of(422), StatusClass::Validation);
    assert_eq!(StatusClass::of(500), StatusClass::Server);
    assert_eq!(StatusClass::of(503), StatusClass::Server);
    assert_eq!(StatusClass::of(418), StatusClass::Other);
}

#[test]
fn extract_message_prefers_body_message() {
    let body = json!({ "message": "email already registered", "statusCode": 422 });
    assert_eq!(extract_message(422, &body), "email already registered");
}

#[test]
fn extract_message_falls_back_to_status() {
    assert_eq!(extract_message(500, &json!({})), "HTTP 500");
    assert_eq!(extract_message(502, &json!(null)), "HTTP 502");
    assert_eq!(extract_message(404, &json!({ "message": "" })), "HTTP 404");
}

#[test]
fn unauthorized_error_displays_server_message() {
    let err = ApiError::Status {
        code: 401,
        class: StatusClass::Unauthorized,
        message: "token expired".to_owned(),
    };
    assert_eq!(err.to_string(), "token expired");
}

#[test]
fn status_class_labels_are_stable() {
    assert_eq!(StatusClass::Unauthorized.to_string(), "unauthorized");
    assert_eq!(StatusClass::Validation.to_string(), "validation");
}

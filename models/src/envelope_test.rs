use super::*;

fn decode(json: &str) -> ApiEnvelope<serde_json::Value> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn success_boolean_scheme_decodes() {
    let env = decode(r#"{"data": {"id": "u1"}, "success": true, "message": null, "statusCode": 200}"#);
    assert!(env.is_success());
    assert_eq!(env.into_result().unwrap()["id"], "u1");
}

#[test]
fn status_string_scheme_decodes() {
    let env = decode(r#"{"data": [1, 2], "status": "success", "message": "ok"}"#);
    assert!(env.is_success());
}

#[test]
fn status_string_is_case_insensitive() {
    let env = decode(r#"{"data": 1, "status": "Success"}"#);
    assert!(env.is_success());
}

#[test]
fn success_flag_wins_over_status_string() {
    let env = decode(r#"{"data": 1, "success": false, "status": "success", "message": "broken"}"#);
    assert!(!env.is_success());
}

#[test]
fn bare_data_counts_as_success() {
    let env = decode(r#"{"data": {"id": "e9"}}"#);
    assert!(env.is_success());
}

#[test]
fn failure_surfaces_server_message() {
    let env = decode(r#"{"data": null, "success": false, "message": "fund not found", "statusCode": 404}"#);
    let err = env.into_result().unwrap_err();
    assert_eq!(
        err,
        EnvelopeError::Failure { message: "fund not found".to_owned(), status_code: Some(404) }
    );
    assert_eq!(err.to_string(), "fund not found");
}

#[test]
fn failure_without_message_gets_placeholder() {
    let env = decode(r#"{"success": false}"#);
    let err = env.into_result().unwrap_err();
    assert_eq!(err.to_string(), "request failed");
}

#[test]
fn ack_accepts_bodyless_success() {
    let env = decode(r#"{"success": true, "message": "deleted"}"#);
    assert_eq!(env.ack(), Ok(()));
}

#[test]
fn ack_surfaces_failure_message() {
    let env = decode(r#"{"status": "error", "message": "not yours to delete"}"#);
    assert_eq!(env.ack().unwrap_err().to_string(), "not yours to delete");
}

#[test]
fn success_without_data_is_missing_data() {
    let env = decode(r#"{"success": true, "message": "deleted"}"#);
    assert_eq!(env.into_result().unwrap_err(), EnvelopeError::MissingData);
}

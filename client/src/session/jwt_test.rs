use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use time::OffsetDateTime;

use super::*;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.signature")
}

#[test]
fn decodes_known_claims() {
    let token = token_with_payload(&json!({
        "sub": "u1",
        "email": "lan@example.com",
        "name": "Lan",
        "exp": 2_000_000_000_i64,
        "iss": "giapha-api"
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("u1"));
    assert_eq!(claims.email.as_deref(), Some("lan@example.com"));
    assert_eq!(claims.exp, Some(2_000_000_000));
}

#[test]
fn two_segments_is_malformed() {
    assert!(decode_claims("abc.def").is_none());
}

#[test]
fn four_segments_is_malformed() {
    assert!(decode_claims("a.b.c.d").is_none());
}

#[test]
fn garbage_base64_is_malformed() {
    assert!(decode_claims("header.!!!not-base64!!!.sig").is_none());
}

#[test]
fn non_json_payload_is_malformed() {
    let payload = URL_SAFE_NO_PAD.encode(b"not json at all");
    assert!(decode_claims(&format!("h.{payload}.s")).is_none());
}

#[test]
fn padded_payload_still_decodes() {
    let body = URL_SAFE_NO_PAD.encode(br#"{"sub":"u2"}"#);
    let token = format!("h.{body}==.s");
    assert_eq!(decode_claims(&token).unwrap().sub.as_deref(), Some("u2"));
}

#[test]
fn malformed_token_counts_as_expired() {
    let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    assert!(is_expired("not-a-jwt", now));
    assert!(is_expired("", now));
}

#[test]
fn expiry_is_compared_against_now() {
    let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let expired = token_with_payload(&json!({ "exp": 1_699_999_999_i64 }));
    let live = token_with_payload(&json!({ "exp": 1_700_000_001_i64 }));
    assert!(is_expired(&expired, now));
    assert!(!is_expired(&live, now));
}

#[test]
fn exp_exactly_now_is_expired() {
    let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let token = token_with_payload(&json!({ "exp": 1_700_000_000_i64 }));
    assert!(is_expired(&token, now));
}

#[test]
fn missing_exp_never_expires() {
    let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let token = token_with_payload(&json!({ "sub": "u1" }));
    assert!(!is_expired(&token, now));
}

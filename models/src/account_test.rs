use super::*;

#[test]
fn user_decodes_camel_case_fields() {
    let user: User = serde_json::from_str(
        r#"{
            "id": "u1",
            "email": "lan@example.com",
            "fullName": "Trần Thị Lan",
            "avatarUrl": "https://cdn.example.com/a.jpg",
            "role": "member",
            "createdOn": "2024-01-05T08:30:00Z"
        }"#,
    )
    .unwrap();
    assert_eq!(user.full_name, "Trần Thị Lan");
    assert_eq!(user.created_on.as_deref(), Some("2024-01-05T08:30:00Z"));
}

#[test]
fn user_accepts_created_date_alias() {
    let user: User = serde_json::from_str(
        r#"{"id": "u2", "email": null, "fullName": "Anon", "createdDate": "2023-12-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(user.created_on.as_deref(), Some("2023-12-01T00:00:00Z"));
}

#[test]
fn login_response_accepts_access_token_alias() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"accessToken": "abc.def.ghi"}"#).unwrap();
    assert_eq!(resp.token, "abc.def.ghi");
    assert!(resp.user.is_none());
}

#[test]
fn login_request_serializes_camel_case() {
    let body = serde_json::to_value(LoginRequest {
        email: "a@b.c".to_owned(),
        password: "pw".to_owned(),
    })
    .unwrap();
    assert_eq!(body["email"], "a@b.c");
    assert_eq!(body["password"], "pw");
}

#[test]
fn profile_tolerates_sparse_payloads() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"id": "u3", "fullName": "Cụ Tổ"}"#).unwrap();
    assert!(profile.biography.is_none());
    assert!(profile.date_of_birth.is_none());
}

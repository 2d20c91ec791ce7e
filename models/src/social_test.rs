use super::*;

#[test]
fn post_defaults_counters_and_images() {
    let post: Post = serde_json::from_str(
        r#"{"id": "p1", "authorId": "u1", "content": "Giỗ tổ năm nay tại nhà thờ họ."}"#,
    )
    .unwrap();
    assert_eq!(post.comment_count, 0);
    assert!(post.image_urls.is_empty());
    assert!(post.my_reaction.is_none());
}

#[test]
fn reaction_kind_round_trips_lowercase() {
    let kind: ReactionKind = serde_json::from_str(r#""love""#).unwrap();
    assert_eq!(kind, ReactionKind::Love);
    assert_eq!(serde_json::to_string(&kind).unwrap(), r#""love""#);
    assert_eq!(kind.as_str(), "love");
}

#[test]
fn unknown_reaction_kind_is_rejected() {
    let result: Result<ReactionKind, _> = serde_json::from_str(r#""wow""#);
    assert!(result.is_err());
}

#[test]
fn comment_accepts_created_date_alias() {
    let comment: Comment = serde_json::from_str(
        r#"{"id": "c1", "postId": "p1", "authorId": "u2", "content": "Nhớ về dự nhé", "createdDate": "2024-04-01T09:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(comment.created_on.as_deref(), Some("2024-04-01T09:00:00Z"));
}

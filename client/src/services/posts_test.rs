use super::*;

#[test]
fn paths_format_expected_endpoints() {
    assert_eq!(feed_path(2, 20), "/post?pageIndex=2&pageSize=20");
    assert_eq!(post_path("p1"), "/post/p1");
    assert_eq!(comments_path("p1"), "/post/p1/comments");
    assert_eq!(comment_path("p1", "c3"), "/post/p1/comments/c3");
    assert_eq!(reactions_path("p1"), "/post/p1/reactions");
}

#[test]
fn reaction_list_decodes_lowercase_kinds() {
    let body = serde_json::json!([
        { "id": "r1", "postId": "p1", "userId": "u1", "kind": "love" },
        { "id": "r2", "postId": "p1", "userId": "u2", "kind": "angry" },
    ]);
    let reactions: Vec<Reaction> = serde_json::from_value(body).unwrap();
    assert_eq!(reactions.len(), 2);
    assert_eq!(reactions[0].kind, ReactionKind::Love);
    assert_eq!(reactions[1].user_id, "u2");
}

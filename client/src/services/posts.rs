//! Social service: posts, comments, reactions over `/post/*`.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use serde_json::json;

use models::{Comment, Page, Post, Reaction, ReactionKind};

use crate::net::error::ApiError;
use crate::net::http::ApiClient;

fn feed_path(page_index: u32, page_size: u32) -> String {
    format!("/post?pageIndex={page_index}&pageSize={page_size}")
}

fn post_path(post_id: &str) -> String {
    format!("/post/{post_id}")
}

fn comments_path(post_id: &str) -> String {
    format!("/post/{post_id}/comments")
}

fn comment_path(post_id: &str, comment_id: &str) -> String {
    format!("/post/{post_id}/comments/{comment_id}")
}

fn reactions_path(post_id: &str) -> String {
    format!("/post/{post_id}/reactions")
}

/// Fetch one page of the feed, newest first.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn feed(api: &ApiClient, page_index: u32, page_size: u32) -> Result<Page<Post>, ApiError> {
    api.get(&feed_path(page_index, page_size)).await
}

/// Create a post. `image_urls` reference already-uploaded media.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn create(api: &ApiClient, content: &str, image_urls: &[String]) -> Result<Post, ApiError> {
    let body = json!({ "content": content, "imageUrls": image_urls });
    api.post("/post", &body).await
}

/// Delete a post.
///
/// # Errors
///
/// Returns [`ApiError`]; 403 when the caller is not the author.
pub async fn delete(api: &ApiClient, post_id: &str) -> Result<(), ApiError> {
    api.delete(&post_path(post_id)).await
}

/// List a post's comments, oldest first.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn comments(api: &ApiClient, post_id: &str) -> Result<Vec<Comment>, ApiError> {
    api.get(&comments_path(post_id)).await
}

/// Comment on a post.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn comment(api: &ApiClient, post_id: &str, content: &str) -> Result<Comment, ApiError> {
    let body = json!({ "content": content });
    api.post(&comments_path(post_id), &body).await
}

/// Delete a comment.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn delete_comment(api: &ApiClient, post_id: &str, comment_id: &str) -> Result<(), ApiError> {
    api.delete(&comment_path(post_id, comment_id)).await
}

/// List who reacted to a post, and how.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn reactions(api: &ApiClient, post_id: &str) -> Result<Vec<Reaction>, ApiError> {
    api.get(&reactions_path(post_id)).await
}

/// React to a post; repeating with a different kind replaces the reaction.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn react(api: &ApiClient, post_id: &str, kind: ReactionKind) -> Result<(), ApiError> {
    let body = json!({ "kind": kind.as_str() });
    api.post_ack(&reactions_path(post_id), &body).await
}

/// Remove the caller's reaction from a post.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn unreact(api: &ApiClient, post_id: &str) -> Result<(), ApiError> {
    api.delete(&reactions_path(post_id)).await
}

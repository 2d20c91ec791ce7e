//! Notifications service over `/notification/*`.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use serde::Deserialize;

use models::Notification;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;

const NOTIFICATIONS: &str = "/notification";
const UNREAD_COUNT: &str = "/notification/unread-count";
const READ_ALL: &str = "/notification/read-all";

fn read_path(notification_id: &str) -> String {
    format!("/notification/{notification_id}/read")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnreadCount {
    count: u64,
}

/// List the caller's notifications, newest first.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn list(api: &ApiClient) -> Result<Vec<Notification>, ApiError> {
    api.get(NOTIFICATIONS).await
}

/// Number of unread notifications, for the badge.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn unread_count(api: &ApiClient) -> Result<u64, ApiError> {
    let payload: UnreadCount = api.get(UNREAD_COUNT).await?;
    Ok(payload.count)
}

/// Mark one notification read.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn mark_read(api: &ApiClient, notification_id: &str) -> Result<(), ApiError> {
    api.post_ack(&read_path(notification_id), &()).await
}

/// Mark every notification read.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn mark_all_read(api: &ApiClient) -> Result<(), ApiError> {
    api.post_ack(READ_ALL, &()).await
}

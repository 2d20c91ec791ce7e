//! Events service: the family calendar over `/event/*`.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::Serialize;

use models::Event;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;

fn month_path(tree_id: &str, year: i32, month: u8) -> String {
    format!("/event?treeId={tree_id}&year={year}&month={month}")
}

fn event_path(event_id: &str) -> String {
    format!("/event/{event_id}")
}

/// List a tree's events for one calendar month.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn list_month(
    api: &ApiClient,
    tree_id: &str,
    year: i32,
    month: u8,
) -> Result<Vec<Event>, ApiError> {
    api.get(&month_path(tree_id, year, month)).await
}

/// Fetch one event by id.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn get(api: &ApiClient, event_id: &str) -> Result<Event, ApiError> {
    api.get(&event_path(event_id)).await
}

/// Body for [`create`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub family_tree_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Start timestamp (ISO 8601).
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub is_recurring: bool,
}

/// Create a calendar event.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn create(api: &ApiClient, event: &NewEvent) -> Result<Event, ApiError> {
    api.post("/event", event).await
}

/// Fields accepted by [`update`]; `None` leaves a field untouched.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// Update an event.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn update(api: &ApiClient, event_id: &str, update: &EventUpdate) -> Result<Event, ApiError> {
    api.put(&event_path(event_id), update).await
}

/// Delete an event.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn delete(api: &ApiClient, event_id: &str) -> Result<(), ApiError> {
    api.delete(&event_path(event_id)).await
}

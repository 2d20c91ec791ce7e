//! Notification DTO for the `/notification/*` endpoints.

use serde::{Deserialize, Serialize};

/// A notification delivered to a user.
///
/// `kind` is an open string set owned by the backend (`"post_comment"`,
/// `"donation_confirmed"`, `"event_reminder"`, ...); the client renders
/// unrecognized kinds with the message text alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier (UUID string).
    pub id: String,
    /// Recipient user (UUID string).
    pub user_id: String,
    pub kind: String,
    pub message: String,
    /// Id of the entity this notification points at, if any.
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default, alias = "read")]
    pub is_read: bool,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
}

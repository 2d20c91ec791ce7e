//! Calendar-event DTO for the `/event/*` endpoints.

use serde::{Deserialize, Serialize};

/// A calendar entry: death anniversaries ("giỗ"), reunions, ceremonies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier (UUID string).
    pub id: String,
    /// Tree this event belongs to (UUID string).
    pub family_tree_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Start timestamp (ISO 8601).
    pub start_time: String,
    /// End timestamp; open-ended events omit it.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Whether the event repeats yearly (anniversaries do).
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}

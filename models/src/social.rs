//! Social-feed DTOs for the `/post/*` endpoints.

#[cfg(test)]
#[path = "social_test.rs"]
mod social_test;

use serde::{Deserialize, Serialize};

/// A post on the family feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post identifier (UUID string).
    pub id: String,
    /// Author user id (UUID string).
    pub author_id: String,
    /// Author display name, denormalized by the backend for rendering.
    #[serde(default)]
    pub author_name: Option<String>,
    pub content: String,
    /// Attached image URLs; empty for text-only posts.
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub comment_count: i64,
    #[serde(default)]
    pub reaction_count: i64,
    /// Reaction the requesting user left on this post, if any.
    #[serde(default)]
    pub my_reaction: Option<ReactionKind>,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}

/// A comment under a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier (UUID string).
    pub id: String,
    /// Post this comment belongs to (UUID string).
    pub post_id: String,
    /// Author user id (UUID string).
    pub author_id: String,
    #[serde(default)]
    pub author_name: Option<String>,
    pub content: String,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
}

/// Reaction kinds the backend recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Love,
    Haha,
    Sad,
    Angry,
}

impl ReactionKind {
    /// Wire string for this kind, as sent in request bodies.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Haha => "haha",
            Self::Sad => "sad",
            Self::Angry => "angry",
        }
    }
}

/// A user's reaction to a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    /// Unique reaction identifier (UUID string).
    pub id: String,
    /// Post reacted to (UUID string).
    pub post_id: String,
    /// Reacting user (UUID string).
    pub user_id: String,
    pub kind: ReactionKind,
}

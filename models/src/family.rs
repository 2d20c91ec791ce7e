//! Family-tree DTOs for the `/ftmember/*` endpoints.

#[cfg(test)]
#[path = "family_test.rs"]
mod family_test;

use serde::{Deserialize, Serialize};

/// A family tree ("gia phả") owned by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyTree {
    /// Unique tree identifier (UUID string).
    pub id: String,
    /// Tree display name, typically the lineage surname.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Owning user (UUID string).
    pub owner_id: String,
    /// Member count, included by list endpoints only.
    #[serde(default)]
    pub member_count: Option<i64>,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}

/// A person in a family tree.
///
/// Parent and spouse relations are id links resolved by the backend; the
/// client renders whatever subgraph the list endpoint returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    /// Unique member identifier (UUID string).
    pub id: String,
    /// Tree this member belongs to (UUID string).
    pub family_tree_id: String,
    /// Full name.
    pub full_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    /// Generation number counted from the founding ancestor (1-based).
    #[serde(default)]
    pub generation: Option<i32>,
    /// Father's member id, if recorded.
    #[serde(default)]
    pub father_id: Option<String>,
    /// Mother's member id, if recorded.
    #[serde(default)]
    pub mother_id: Option<String>,
    /// Spouse member ids; empty when unrecorded.
    #[serde(default)]
    pub spouse_ids: Vec<String>,
    /// Birth date (ISO 8601 date).
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Death date; `None` for living members.
    #[serde(default)]
    pub date_of_death: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Linked platform account, when the member registered themselves.
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}

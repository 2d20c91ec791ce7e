//! Family-tree service: trees and members over `/ftmember/*`.

#[cfg(test)]
#[path = "family_test.rs"]
mod family_test;

use serde::Serialize;

use models::{FamilyMember, FamilyTree};

use crate::net::error::ApiError;
use crate::net::http::ApiClient;

const TREES: &str = "/ftmember/trees";

fn tree_path(tree_id: &str) -> String {
    format!("/ftmember/tree/{tree_id}")
}

fn tree_members_path(tree_id: &str) -> String {
    format!("/ftmember/tree/{tree_id}/members")
}

fn member_path(member_id: &str) -> String {
    format!("/ftmember/{member_id}")
}

/// List the trees the authenticated user belongs to.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn list_trees(api: &ApiClient) -> Result<Vec<FamilyTree>, ApiError> {
    api.get(TREES).await
}

/// Fetch one tree by id.
///
/// # Errors
///
/// Returns [`ApiError`]; 404 when the tree does not exist.
pub async fn get_tree(api: &ApiClient, tree_id: &str) -> Result<FamilyTree, ApiError> {
    api.get(&tree_path(tree_id)).await
}

/// List every member of a tree. The whole subgraph comes back at once;
/// generation layout is a rendering concern.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn list_members(api: &ApiClient, tree_id: &str) -> Result<Vec<FamilyMember>, ApiError> {
    api.get(&tree_members_path(tree_id)).await
}

/// Fetch one member by id.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn get_member(api: &ApiClient, member_id: &str) -> Result<FamilyMember, ApiError> {
    api.get(&member_path(member_id)).await
}

/// Body for [`create_member`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFamilyMember {
    pub family_tree_id: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
}

/// Add a member to a tree.
///
/// # Errors
///
/// Returns [`ApiError`]; 422 when the backend rejects the relations.
pub async fn create_member(api: &ApiClient, member: &NewFamilyMember) -> Result<FamilyMember, ApiError> {
    api.post("/ftmember", member).await
}

/// Fields accepted by [`update_member`]; `None` leaves a field untouched.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
}

/// Update a member record.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn update_member(
    api: &ApiClient,
    member_id: &str,
    update: &FamilyMemberUpdate,
) -> Result<FamilyMember, ApiError> {
    api.put(&member_path(member_id), update).await
}

/// Delete a member record.
///
/// # Errors
///
/// Returns [`ApiError`]; 403 when the caller is not the tree owner.
pub async fn delete_member(api: &ApiClient, member_id: &str) -> Result<(), ApiError> {
    api.delete(&member_path(member_id)).await
}

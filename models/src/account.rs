//! Account and profile DTOs for the `/account/*` endpoints.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by login and `/account/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email, absent for google-only accounts on some endpoints.
    pub email: Option<String>,
    /// Display name.
    pub full_name: String,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Role string assigned by the backend (e.g. `"member"`, `"admin"`).
    #[serde(default)]
    pub role: Option<String>,
    /// Creation timestamp (ISO 8601); older endpoints call this `createdDate`.
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    /// Last-modification timestamp; aliased the same way as `created_on`.
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}

/// Extended profile with the biography fields used for ancestor records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub full_name: String,
    /// Free-text biography shown on the profile page.
    #[serde(default)]
    pub biography: Option<String>,
    /// Gender string as the backend stores it.
    #[serde(default)]
    pub gender: Option<String>,
    /// Birth date (ISO 8601 date).
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Home address.
    #[serde(default)]
    pub address: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, alias = "createdDate")]
    pub created_on: Option<String>,
    #[serde(default, alias = "lastModifiedDate")]
    pub last_modified_on: Option<String>,
}

/// Body for `POST /account/login`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /account/register`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Login response: a bearer JWT plus the authenticated user, when the
/// endpoint includes it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token to attach to subsequent requests.
    #[serde(alias = "accessToken")]
    pub token: String,
    /// The logged-in user; some backend versions omit this.
    #[serde(default)]
    pub user: Option<User>,
}

//! Account service: login, registration, profile.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use serde_json::json;

use models::{LoginRequest, LoginResponse, RegisterRequest, User, UserProfile};

use crate::net::error::ApiError;
use crate::net::http::ApiClient;

const LOGIN: &str = "/account/login";
const REGISTER: &str = "/account/register";
const GOOGLE_LOGIN: &str = "/account/google-login";
const ME: &str = "/account/me";
const PROFILE: &str = "/account/profile";

/// Exchange email/password for a session token.
///
/// The token is stored in the client's [`SessionStore`] on success so the
/// next call is already authenticated.
///
/// [`SessionStore`]: crate::session::store::SessionStore
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a rejected login.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    let response: LoginResponse = api.post_public(LOGIN, &body).await?;
    api.session().set(response.token.clone());
    Ok(response)
}

/// Exchange a Google sign-in credential for a session token.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a rejected credential.
pub async fn google_login(api: &ApiClient, credential: &str) -> Result<LoginResponse, ApiError> {
    let body = json!({ "credential": credential });
    let response: LoginResponse = api.post_public(GOOGLE_LOGIN, &body).await?;
    api.session().set(response.token.clone());
    Ok(response)
}

/// Create an account. Does not log in; call [`login`] after.
///
/// # Errors
///
/// Returns [`ApiError`]; 422 carries the validation message.
pub async fn register(
    api: &ApiClient,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<User, ApiError> {
    let body = RegisterRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        full_name: full_name.to_owned(),
    };
    api.post_public(REGISTER, &body).await
}

/// Fetch the authenticated user.
///
/// # Errors
///
/// Returns [`ApiError`]; 401 when the session token is dead.
pub async fn me(api: &ApiClient) -> Result<User, ApiError> {
    api.get(ME).await
}

/// Fetch the authenticated user's full profile and biography.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn profile(api: &ApiClient) -> Result<UserProfile, ApiError> {
    api.get(PROFILE).await
}

/// Fields accepted by [`update_profile`]; `None` leaves a field untouched.
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Update the authenticated user's profile.
///
/// # Errors
///
/// Returns [`ApiError`].
pub async fn update_profile(api: &ApiClient, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
    api.put(PROFILE, update).await
}

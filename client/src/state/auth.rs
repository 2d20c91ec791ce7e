//! Auth snapshot for identity-dependent behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use models::User;

/// Current-user state as the front-end sees it.
///
/// `loading` distinguishes "not fetched yet" from "fetched, not logged in"
/// so guards do not bounce the user to login before the first `/account/me`
/// answer arrives.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State while the initial identity fetch is in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    /// Record the fetch outcome; `None` means unauthenticated.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    /// Whether a login is required: resolved and nobody home.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

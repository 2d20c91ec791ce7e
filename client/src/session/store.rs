//! Bearer-token store — the one shared mutable resource in the client.
//!
//! DESIGN
//! ======
//! The token lives in an `Arc<RwLock<Option<String>>>` read on every
//! request, optionally mirrored to a file so sessions survive process
//! restarts (the persisted-storage analog). Persistence failures are
//! logged, never surfaced: losing the mirror degrades to "log in again
//! next run", which is not worth failing a live request over.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared, optionally file-backed holder for the session bearer token.
#[derive(Clone)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// A store with no file mirror; the token lives for the process only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self { token: Arc::new(RwLock::new(None)), path: None }
    }

    /// A store mirrored at `path`, preloaded from the file when it exists.
    #[must_use]
    pub fn with_file(path: PathBuf) -> Self {
        let initial = match fs::read_to_string(&path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_owned())
                }
            }
            Err(_) => None,
        };
        Self { token: Arc::new(RwLock::new(initial)), path: Some(path) }
    }

    /// Current token, if logged in. Called once per outgoing request.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Store a fresh token and mirror it to the file, if configured.
    pub fn set(&self, token: String) {
        if let Some(path) = &self.path {
            if let Err(error) = fs::write(path, &token) {
                tracing::warn!(path = %path.display(), %error, "failed to persist session token");
            }
        }
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Drop the token and remove the file mirror, if configured.
    pub fn clear(&self) {
        if let Some(path) = &self.path {
            if let Err(error) = fs::remove_file(path) {
                if error.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), %error, "failed to remove session token file");
                }
            }
        }
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

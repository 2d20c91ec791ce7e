//! Typed client for the gia phả backend.
//!
//! ARCHITECTURE
//! ============
//! Layered the way the app consumes it:
//!
//!   net      — reqwest wrapper, envelope unwrapping, error classification
//!   session  — bearer-token store (file-persisted) and JWT claim helpers
//!   services — one module per backend domain, free async fns over ApiClient
//!   state    — client-held state: auth snapshot, id-keyed entity cache
//!   util     — presentation math (pagination windows)
//!
//! All I/O is plain request/response; ordering between concurrent requests
//! is whatever the backend imposes. There are no retries and no automatic
//! recovery on 401 — callers decide what a dead session means for them.

pub mod net;
pub mod services;
pub mod session;
pub mod state;
pub mod util;

pub use net::error::{ApiError, StatusClass};
pub use net::http::ApiClient;
pub use session::store::SessionStore;

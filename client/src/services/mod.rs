//! Per-domain REST service modules.
//!
//! Each module is a set of free async functions over [`ApiClient`] plus the
//! pure path helpers they format their endpoints with. Services return
//! domain types from `models`; every envelope and error concern is handled
//! one layer down in `net`.
//!
//! [`ApiClient`]: crate::net::http::ApiClient

pub mod account;
pub mod campaigns;
pub mod events;
pub mod family;
pub mod funds;
pub mod notifications;
pub mod posts;

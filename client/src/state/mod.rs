//! Client-held state: the auth snapshot and the id-keyed entity cache.

pub mod auth;
pub mod cache;

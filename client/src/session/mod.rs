//! Session-token persistence and JWT claim inspection.

pub mod jwt;
pub mod store;

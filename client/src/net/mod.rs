//! HTTP transport: request helpers, envelope unwrapping, error taxonomy.

pub mod error;
pub mod http;

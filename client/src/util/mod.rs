//! Presentation math with no I/O.

pub mod paging;

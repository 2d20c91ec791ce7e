//! Paginated list wrapper used by feed and list endpoints.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use serde::Deserialize;

/// One page of a list response.
///
/// Endpoints disagree on field names here too (`items` vs `data`,
/// `pageIndex` vs `pageNumber`); all spellings decode to the same shape.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, alias = "data")]
    pub items: Vec<T>,
    /// 1-based page number.
    #[serde(default = "first_page", alias = "pageNumber", alias = "currentPage")]
    pub page_index: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default, alias = "totalItems")]
    pub total_count: u64,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    /// Whether a page after this one exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}

//! Short-lived in-memory cache keyed by entity id.
//!
//! DESIGN
//! ======
//! This is deliberately nothing more than a map: no TTL, no eviction, no
//! cross-entity invalidation. The only protocol is "refetch" — mutations
//! call [`EntityCache::invalidate`] on the affected id and the next read
//! misses and goes back to the server. That matches how little freshness
//! the product needs; anything smarter would be guessing at backend
//! semantics the client does not own.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

/// In-memory map of last-fetched entities by id.
#[derive(Clone, Debug, Default)]
pub struct EntityCache<T> {
    entries: HashMap<String, T>,
}

impl<T> EntityCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Store the last-fetched copy of an entity.
    pub fn insert(&mut self, id: impl Into<String>, value: T) {
        self.entries.insert(id.into(), value);
    }

    /// The last-fetched copy, if any. Possibly stale — that is the deal.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// Drop one entity so the next read refetches.
    pub fn invalidate(&mut self, id: &str) -> Option<T> {
        self.entries.remove(id)
    }

    /// Drop everything, e.g. on logout.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

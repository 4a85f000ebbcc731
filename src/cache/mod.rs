//! Short-lived response cache for upstream order queries.
//!
//! Entries are stamped on write and ignored once older than the TTL. Stale
//! entries are never evicted, so the map grows with the number of distinct
//! keys seen over the process lifetime.

use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::observability::metrics;

const KEY_SEPARATOR: char = '\u{1f}';

/// Composite cache key derived from `userId`, `startDate` and `endDate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Build a key from the three query fields, in that fixed order.
    ///
    /// Each field is rendered as JSON text so `42` and `"42"` stay distinct.
    pub fn new(user_id: &Value, start_date: &Value, end_date: &Value) -> Self {
        let mut key = String::new();
        for (i, part) in [user_id, start_date, end_date].into_iter().enumerate() {
            if i > 0 {
                key.push(KEY_SEPARATOR);
            }
            key.push_str(&part.to_string());
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    stored_at: Instant,
}

/// A thread-safe TTL cache shared by all request handlers.
#[derive(Clone)]
pub struct ResponseCache {
    inner: Arc<DashMap<CacheKey, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    /// Create an empty cache with the given freshness window.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Return the stored value if present and still fresh.
    pub fn get(&self, key: &CacheKey) -> Option<Value> {
        let hit = self
            .inner
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone());
        metrics::record_cache_lookup(hit.is_some());
        hit
    }

    /// Store a value, overwriting any previous entry for the key.
    pub fn put(&self, key: CacheKey, value: Value) {
        self.inner.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
        metrics::record_cache_size(self.len());
    }

    /// Number of stored entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("entries", &self.len())
            .field("ttl", &self.ttl)
            .finish()
    }
}

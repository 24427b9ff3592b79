//! In-memory cache with absolute and sliding expiration.
//!
//! Thread-safe via `DashMap`. Expiry is checked lazily on `get()`; the
//! `evict_expired()` sweep exists for entries that are never read again.
//! Writes replace whole entries, values are never mutated in place.

use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

/// Expiration windows for one kind of cached record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Hard deadline measured from insertion.
    pub absolute: Duration,
    /// Idle window, reset by every successful read.
    pub sliding: Duration,
}

impl CachePolicy {
    pub const BOOKS: CachePolicy = CachePolicy::minutes(10, 5);
    pub const AUTHORS: CachePolicy = CachePolicy::minutes(30, 15);
    pub const BOOK_DETAIL: CachePolicy = CachePolicy::minutes(30, 15);
    pub const BOOKS_BY_AUTHOR: CachePolicy = CachePolicy::minutes(20, 10);

    pub const fn new(absolute: Duration, sliding: Duration) -> Self {
        Self { absolute, sliding }
    }

    const fn minutes(absolute: u64, sliding: u64) -> Self {
        Self::new(
            Duration::from_secs(absolute * 60),
            Duration::from_secs(sliding * 60),
        )
    }
}

/// The policy for each record kind the catalog client caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicies {
    pub books: CachePolicy,
    pub authors: CachePolicy,
    pub book_detail: CachePolicy,
    pub books_by_author: CachePolicy,
}

impl Default for CachePolicies {
    fn default() -> Self {
        Self {
            books: CachePolicy::BOOKS,
            authors: CachePolicy::AUTHORS,
            book_detail: CachePolicy::BOOK_DETAIL,
            books_by_author: CachePolicy::BOOKS_BY_AUTHOR,
        }
    }
}

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
    sliding: Duration,
    last_access: Instant,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at || now.saturating_duration_since(self.last_access) >= self.sliding
    }
}

/// Key-value cache shared between concurrent requests.
pub struct ExpiringCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
}

impl<V: Clone> ExpiringCache<V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get a live value and extend its sliding window.
    ///
    /// Returns `None` if the key is missing or expired; expired entries are
    /// removed on the way out.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();

        match self.entries.get_mut(key) {
            Some(mut entry) if !entry.is_expired(now) => {
                entry.last_access = now;
                return Some(entry.value.clone());
            }
            Some(_) => {}
            None => return None,
        }

        // Only drop the entry if it is still the stale one; a concurrent
        // writer may have replaced it since the guard was released.
        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        None
    }

    /// Insert or replace the value stored under `key`.
    pub fn put(&self, key: impl Into<String>, value: V, policy: CachePolicy) {
        let now = Instant::now();
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                expires_at: now + policy.absolute,
                sliding: policy.sliding,
                last_access: now,
            },
        );
    }

    /// Remove all expired entries, returning how many were dropped.
    pub fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    /// Number of entries currently held, including ones not yet found expired.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for ExpiringCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

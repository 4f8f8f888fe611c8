use super::entry::CacheEntry;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Generic key/value store with per-entry TTL.
///
/// Expired entries are removed lazily by the first `get` that observes them
/// and in bulk by `cleanup`, which the sweep job runs on a fixed interval so
/// keys that are never re-read do not accumulate. No operation returns an
/// error; the cache is a bag of values keyed by string.
pub struct ExpiringCache<V: Clone> {
    entries: DashMap<String, CacheEntry<V>>,
    default_ttl: Duration,
}

impl<V: Clone> ExpiringCache<V> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
        }
    }

    /// Store `value` under `key` with the default TTL, overwriting any
    /// existing entry.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Store `value` under `key` expiring `ttl` from now.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let now = Instant::now();
        self.entries
            .insert(key.into(), CacheEntry::new(value, now, now + ttl));
    }

    /// Return the value for `key` if present and unexpired. An expired entry
    /// is removed on observation (lazy eviction).
    pub fn get(&self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) => {
                if entry.is_expired(Instant::now()) {
                    true
                } else {
                    return Some(entry.value.clone());
                }
            }
            None => return None,
        };

        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Remove the entry for `key`. No error when the key is absent.
    pub fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Remove every entry whose expiry has passed, returning how many were
    /// dropped. Safe to run concurrently with `get`/`set`.
    pub fn cleanup(&self) -> usize {
        let now = Instant::now();
        let mut stale = Vec::new();

        for entry in self.entries.iter() {
            if entry.value().is_expired(now) {
                stale.push(entry.key().clone());
            }
        }

        let mut removed = 0;
        for key in stale {
            // Re-check under the shard lock: an overwrite between the scan
            // and the removal keeps its fresh entry.
            if self
                .entries
                .remove_if(&key, |_, entry| entry.is_expired(now))
                .is_some()
            {
                removed += 1;
            }
        }

        if removed > 0 {
            debug!(removed, "Evicted expired cache entries");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

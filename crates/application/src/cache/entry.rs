use std::time::Instant;

/// A cached value with its storage and expiry timestamps.
///
/// Entries are owned exclusively by the cache; consumers only ever receive
/// clones of `V`, never references into storage.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub stored_at: Instant,
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    pub fn new(value: V, stored_at: Instant, expires_at: Instant) -> Self {
        Self {
            value,
            stored_at,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

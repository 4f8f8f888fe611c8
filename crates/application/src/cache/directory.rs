use super::store::ExpiringCache;
use runclub_directory_domain::ClubRecord;
use std::sync::Arc;
use std::time::Duration;

/// What the directory stores: resolved record sets (full listing and search
/// results) and individual records looked up by id. Sets are snapshots behind
/// `Arc`; handing one out never exposes cache internals.
#[derive(Clone)]
pub enum CachedValue {
    List(Arc<[ClubRecord]>),
    Record(Arc<ClubRecord>),
}

/// Typed facade over the generic expiring cache, shared process-wide and
/// injected wherever resolution happens. Tests construct a fresh instance for
/// isolation.
pub struct DirectoryCache {
    inner: ExpiringCache<CachedValue>,
}

impl DirectoryCache {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            inner: ExpiringCache::new(default_ttl),
        }
    }

    pub fn get_list(&self, key: &str) -> Option<Arc<[ClubRecord]>> {
        match self.inner.get(key) {
            Some(CachedValue::List(list)) => Some(list),
            _ => None,
        }
    }

    pub fn set_list(&self, key: impl Into<String>, list: Arc<[ClubRecord]>, ttl: Duration) {
        self.inner.set_with_ttl(key, CachedValue::List(list), ttl);
    }

    pub fn get_record(&self, key: &str) -> Option<Arc<ClubRecord>> {
        match self.inner.get(key) {
            Some(CachedValue::Record(record)) => Some(record),
            _ => None,
        }
    }

    /// Single records are cached with the default TTL.
    pub fn set_record(&self, key: impl Into<String>, record: Arc<ClubRecord>) {
        self.inner.set(key, CachedValue::Record(record));
    }

    pub fn remove(&self, key: &str) {
        self.inner.remove(key);
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    pub fn cleanup(&self) -> usize {
        self.inner.cleanup()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

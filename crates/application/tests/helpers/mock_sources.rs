#![allow(dead_code)]

use async_trait::async_trait;
use runclub_directory_application::ports::{ClubSource, FallbackSource};
use runclub_directory_domain::{ClubRecord, DirectoryError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock ClubSource
// ============================================================================

#[derive(Clone, Default)]
pub struct MockClubSource {
    records: Arc<RwLock<Vec<ClubRecord>>>,
    search_results: Arc<RwLock<Option<Vec<ClubRecord>>>>,
    should_fail: Arc<AtomicBool>,
    fetch_calls: Arc<AtomicUsize>,
}

impl MockClubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ClubRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        let source = Self::new();
        source.should_fail.store(true, Ordering::SeqCst);
        source
    }

    pub async fn set_records(&self, records: Vec<ClubRecord>) {
        *self.records.write().await = records;
    }

    /// Canned answer for `search`, independent of `records`.
    pub async fn set_search_results(&self, results: Vec<ClubRecord>) {
        *self.search_results.write().await = Some(results);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClubSource for MockClubSource {
    async fn fetch_all(&self) -> Result<Vec<ClubRecord>, DirectoryError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DirectoryError::SourceUnavailable(
                "mock remote failed".to_string(),
            ));
        }
        Ok(self.records.read().await.clone())
    }

    async fn search(
        &self,
        _query: &str,
        _location: &str,
    ) -> Result<Vec<ClubRecord>, DirectoryError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DirectoryError::SourceUnavailable(
                "mock remote failed".to_string(),
            ));
        }
        match self.search_results.read().await.clone() {
            Some(results) => Ok(results),
            None => Ok(Vec::new()),
        }
    }
}

// ============================================================================
// Mock FallbackSource
// ============================================================================

#[derive(Clone, Default)]
pub struct MockFallbackSource {
    records: Arc<RwLock<Vec<ClubRecord>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockFallbackSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let source = Self::new();
        source.should_fail.store(true, Ordering::SeqCst);
        source
    }

    pub async fn set_records(&self, records: Vec<ClubRecord>) {
        *self.records.write().await = records;
    }
}

#[async_trait]
impl FallbackSource for MockFallbackSource {
    async fn load(&self) -> Result<Vec<ClubRecord>, DirectoryError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DirectoryError::Io("mock fallback failed".to_string()));
        }
        Ok(self.records.read().await.clone())
    }
}

// ============================================================================
// Record builders
// ============================================================================

pub fn make_club(id: &str, name: &str, city: &str) -> ClubRecord {
    ClubRecord {
        id: id.to_string(),
        name: name.to_string(),
        category: "Athletic club".to_string(),
        site: None,
        phone: None,
        email: None,
        description: None,
        full_address: format!("1 Main St, {city}"),
        city: city.to_string(),
        postal_code: "10001".to_string(),
        latitude: 40.7,
        longitude: -74.0,
        rating: 4.0,
        reviews: 10,
        photo: None,
    }
}

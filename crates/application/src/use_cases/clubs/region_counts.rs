use crate::services::ranking::{count_by_region, SUMMARY_REGIONS};
use crate::services::ClubResolver;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RegionCount {
    pub region: String,
    pub count: usize,
}

/// Region counts are a derived view recomputed per call; they run over the
/// already-cached full listing, so they carry no cache entry of their own.
pub struct GetRegionCountsUseCase {
    resolver: Arc<ClubResolver>,
}

impl GetRegionCountsUseCase {
    pub fn new(resolver: Arc<ClubResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, region: &str) -> usize {
        let clubs = self.resolver.resolve_all().await;
        count_by_region(&clubs, region)
    }

    pub async fn execute_summary(&self) -> Vec<RegionCount> {
        let clubs = self.resolver.resolve_all().await;
        SUMMARY_REGIONS
            .iter()
            .map(|region| RegionCount {
                region: region.to_string(),
                count: count_by_region(&clubs, region),
            })
            .collect()
    }
}

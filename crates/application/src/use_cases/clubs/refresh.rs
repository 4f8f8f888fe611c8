use crate::services::ClubResolver;
use std::sync::Arc;

/// Force a fresh resolution, bypassing the cached listing. Returns the size
/// of the refreshed set.
pub struct RefreshClubsUseCase {
    resolver: Arc<ClubResolver>,
}

impl RefreshClubsUseCase {
    pub fn new(resolver: Arc<ClubResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self) -> usize {
        self.resolver.refresh().await.len()
    }
}

use crate::services::ranking::{featured_clubs, DEFAULT_FEATURED_LIMIT};
use crate::services::ClubResolver;
use runclub_directory_domain::ClubRecord;
use std::sync::Arc;

const MAX_LIMIT: usize = 50;

pub struct GetFeaturedClubsUseCase {
    resolver: Arc<ClubResolver>,
}

impl GetFeaturedClubsUseCase {
    pub fn new(resolver: Arc<ClubResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, limit: Option<usize>) -> Vec<ClubRecord> {
        let limit = limit.unwrap_or(DEFAULT_FEATURED_LIMIT).min(MAX_LIMIT);
        let clubs = self.resolver.resolve_all().await;
        featured_clubs(&clubs, limit)
    }
}

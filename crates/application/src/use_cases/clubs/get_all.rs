use crate::services::ClubResolver;
use runclub_directory_domain::ClubRecord;
use std::sync::Arc;

pub struct GetClubsUseCase {
    resolver: Arc<ClubResolver>,
}

impl GetClubsUseCase {
    pub fn new(resolver: Arc<ClubResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self) -> Arc<[ClubRecord]> {
        self.resolver.resolve_all().await
    }
}

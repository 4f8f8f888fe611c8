use crate::services::ClubResolver;
use runclub_directory_domain::ClubRecord;
use std::sync::Arc;

pub struct GetClubUseCase {
    resolver: Arc<ClubResolver>,
}

impl GetClubUseCase {
    pub fn new(resolver: Arc<ClubResolver>) -> Self {
        Self { resolver }
    }

    /// `None` for an unknown id; never an error.
    pub async fn execute(&self, id: &str) -> Option<Arc<ClubRecord>> {
        self.resolver.resolve_by_id(id).await
    }
}

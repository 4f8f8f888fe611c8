use crate::services::SearchService;
use runclub_directory_domain::ClubRecord;
use std::sync::Arc;

pub struct SearchClubsUseCase {
    search: Arc<SearchService>,
}

impl SearchClubsUseCase {
    pub fn new(search: Arc<SearchService>) -> Self {
        Self { search }
    }

    pub async fn execute(&self, query: &str, location: &str) -> Arc<[ClubRecord]> {
        self.search.search(query, location).await
    }
}

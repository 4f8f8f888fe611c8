use runclub_directory_application::cache::DirectoryCache;
use runclub_directory_application::use_cases::{
    GetClubUseCase, GetClubsUseCase, GetFeaturedClubsUseCase, GetRegionCountsUseCase,
    RefreshClubsUseCase, SearchClubsUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_clubs: Arc<GetClubsUseCase>,
    pub get_club: Arc<GetClubUseCase>,
    pub search_clubs: Arc<SearchClubsUseCase>,
    pub get_featured: Arc<GetFeaturedClubsUseCase>,
    pub region_counts: Arc<GetRegionCountsUseCase>,
    pub refresh: Arc<RefreshClubsUseCase>,
    pub cache: Arc<DirectoryCache>,
    pub sheets_configured: bool,
}

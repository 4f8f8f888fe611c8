use runclub_directory_api::AppState;
use runclub_directory_application::cache::DirectoryCache;
use runclub_directory_application::ports::ClubSource;
use runclub_directory_application::services::{ClubResolver, SearchService};
use runclub_directory_application::use_cases::{
    GetClubUseCase, GetClubsUseCase, GetFeaturedClubsUseCase, GetRegionCountsUseCase,
    RefreshClubsUseCase, SearchClubsUseCase,
};
use runclub_directory_domain::Config;
use runclub_directory_infrastructure::{BundledFallbackSource, SheetsClubSource};
use std::sync::Arc;

/// Wire sources, cache, services, and use cases into the API state.
///
/// Source selection happens here, once, at construction time: the remote
/// client and the fallback are injected capabilities, not probed per call.
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let cache = Arc::new(DirectoryCache::new(config.cache.default_ttl()));

    let remote: Arc<dyn ClubSource> = Arc::new(SheetsClubSource::new(&config.sheets)?);
    let fallback = Arc::new(BundledFallbackSource::new(&config.fallback));

    let resolver = Arc::new(ClubResolver::new(
        Arc::clone(&remote),
        fallback,
        Arc::clone(&cache),
        config.cache.clone(),
    ));
    let search = Arc::new(SearchService::new(
        Arc::clone(&resolver),
        remote,
        Arc::clone(&cache),
        config.cache.clone(),
    ));

    Ok(AppState {
        get_clubs: Arc::new(GetClubsUseCase::new(Arc::clone(&resolver))),
        get_club: Arc::new(GetClubUseCase::new(Arc::clone(&resolver))),
        search_clubs: Arc::new(SearchClubsUseCase::new(search)),
        get_featured: Arc::new(GetFeaturedClubsUseCase::new(Arc::clone(&resolver))),
        region_counts: Arc::new(GetRegionCountsUseCase::new(Arc::clone(&resolver))),
        refresh: Arc::new(RefreshClubsUseCase::new(resolver)),
        cache,
        sheets_configured: config.sheets.is_configured(),
    })
}

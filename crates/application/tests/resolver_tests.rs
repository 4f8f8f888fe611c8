use runclub_directory_application::cache::DirectoryCache;
use runclub_directory_application::services::resolver::seed_clubs;
use runclub_directory_application::services::ClubResolver;
use runclub_directory_domain::config::CacheConfig;
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::{make_club, MockClubSource, MockFallbackSource};

fn resolver_with(
    remote: MockClubSource,
    fallback: MockFallbackSource,
) -> (Arc<ClubResolver>, Arc<DirectoryCache>) {
    let cache = Arc::new(DirectoryCache::new(Duration::from_secs(300)));
    let resolver = Arc::new(ClubResolver::new(
        Arc::new(remote),
        Arc::new(fallback),
        Arc::clone(&cache),
        CacheConfig::default(),
    ));
    (resolver, cache)
}

#[tokio::test]
async fn remote_result_wins_when_available() {
    // Arrange - remote has data, fallback would differ
    let remote = MockClubSource::with_records(vec![
        make_club("r1", "Harbor Runners", "New York"),
        make_club("r2", "Uptown Striders", "New York"),
    ]);
    let fallback = MockFallbackSource::new();
    fallback
        .set_records(vec![make_club("f1", "Fallback Club", "Brooklyn")])
        .await;
    let (resolver, _) = resolver_with(remote, fallback);

    // Act
    let clubs = resolver.resolve_all().await;

    // Assert - remote order preserved
    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].id, "r1");
    assert_eq!(clubs[1].id, "r2");
}

#[tokio::test]
async fn remote_failure_degrades_to_fallback() {
    // Arrange
    let remote = MockClubSource::failing();
    let fallback = MockFallbackSource::new();
    fallback
        .set_records(vec![make_club("f1", "Fallback Club", "Brooklyn")])
        .await;
    let (resolver, _) = resolver_with(remote, fallback);

    // Act
    let clubs = resolver.resolve_all().await;

    // Assert - no error surfaced, fallback data returned
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].id, "f1");
}

#[tokio::test]
async fn empty_remote_result_degrades_to_fallback() {
    let remote = MockClubSource::new(); // returns Ok(vec![])
    let fallback = MockFallbackSource::new();
    fallback
        .set_records(vec![make_club("f1", "Fallback Club", "Brooklyn")])
        .await;
    let (resolver, _) = resolver_with(remote, fallback);

    let clubs = resolver.resolve_all().await;
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].id, "f1");
}

#[tokio::test]
async fn both_sources_failing_yields_seed_set() {
    // Worst case: the listing is still never empty.
    let (resolver, _) = resolver_with(MockClubSource::failing(), MockFallbackSource::failing());

    let clubs = resolver.resolve_all().await;
    let seeds = seed_clubs();
    assert_eq!(clubs.len(), seeds.len());
    assert_eq!(clubs[0].name, "Central Park Running Club");
    assert_eq!(clubs[1].name, "Brooklyn Bridge Runners");
}

#[tokio::test]
async fn resolved_set_is_served_from_cache() {
    // Arrange
    let remote = MockClubSource::with_records(vec![make_club("r1", "Harbor Runners", "New York")]);
    let counter = remote.clone();
    let (resolver, _) = resolver_with(remote, MockFallbackSource::new());

    // Act - two resolutions within the TTL
    resolver.resolve_all().await;
    resolver.resolve_all().await;

    // Assert - remote hit exactly once
    assert_eq!(counter.fetch_calls(), 1);
}

#[tokio::test]
async fn resolve_by_id_finds_and_caches_record() {
    let remote = MockClubSource::with_records(vec![
        make_club("r1", "Harbor Runners", "New York"),
        make_club("r2", "Uptown Striders", "New York"),
    ]);
    let (resolver, cache) = resolver_with(remote, MockFallbackSource::new());

    let club = resolver.resolve_by_id("r2").await.unwrap();
    assert_eq!(club.name, "Uptown Striders");
    // Cached under its own key alongside the full listing.
    assert_eq!(cache.len(), 2);
}

#[tokio::test]
async fn resolve_by_id_miss_returns_none_without_caching() {
    let remote = MockClubSource::with_records(vec![make_club("r1", "Harbor Runners", "New York")]);
    let (resolver, cache) = resolver_with(remote, MockFallbackSource::new());

    assert!(resolver.resolve_by_id("missing").await.is_none());
    assert!(resolver.resolve_by_id("missing").await.is_none());
    // Only the full listing is cached; misses carry no negative entry.
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn refresh_bypasses_cached_listing() {
    // Arrange - first resolution caches one record
    let remote = MockClubSource::with_records(vec![make_club("r1", "Harbor Runners", "New York")]);
    let handle = remote.clone();
    let (resolver, _) = resolver_with(remote, MockFallbackSource::new());
    resolver.resolve_all().await;

    // Act - remote content changes, then refresh
    handle
        .set_records(vec![
            make_club("r1", "Harbor Runners", "New York"),
            make_club("r2", "Uptown Striders", "New York"),
        ])
        .await;
    let refreshed = resolver.refresh().await;

    // Assert
    assert_eq!(refreshed.len(), 2);
    assert_eq!(handle.fetch_calls(), 2);
}

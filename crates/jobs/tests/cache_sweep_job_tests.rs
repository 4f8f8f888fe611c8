use runclub_directory_application::cache::DirectoryCache;
use runclub_directory_domain::ClubRecord;
use runclub_directory_jobs::{CacheSweepJob, JobRunner};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

fn club(id: &str) -> Arc<ClubRecord> {
    Arc::new(ClubRecord {
        id: id.to_string(),
        name: format!("Club {id}"),
        category: "Athletic club".to_string(),
        site: None,
        phone: None,
        email: None,
        description: None,
        full_address: "1 Main St, New York, NY 10001".to_string(),
        city: "New York".to_string(),
        postal_code: "10001".to_string(),
        latitude: 40.7,
        longitude: -74.0,
        rating: 4.0,
        reviews: 10,
        photo: None,
    })
}

#[tokio::test]
async fn sweep_removes_expired_entries_on_interval() {
    // Arrange - one entry that expires immediately, one long-lived
    let cache = Arc::new(DirectoryCache::new(Duration::from_millis(50)));
    cache.set_record("club_stale", club("stale"));
    cache.set_list(
        "all_clubs",
        Arc::from(Vec::<ClubRecord>::new()),
        Duration::from_secs(60),
    );

    let job = Arc::new(CacheSweepJob::new(Arc::clone(&cache)).with_interval(1));

    // Act
    job.start().await;
    sleep(Duration::from_millis(1200)).await;

    // Assert - only the expired entry is gone
    assert_eq!(cache.len(), 1);
    assert!(cache.get_record("club_stale").is_none());
    assert!(cache.get_list("all_clubs").is_some());
}

#[tokio::test]
async fn sweep_stops_on_cancellation() {
    let cache = Arc::new(DirectoryCache::new(Duration::from_millis(50)));
    let token = CancellationToken::new();
    let job = Arc::new(
        CacheSweepJob::new(Arc::clone(&cache))
            .with_interval(1)
            .with_cancellation(token.clone()),
    );
    job.start().await;

    token.cancel();
    sleep(Duration::from_millis(50)).await;

    // A cancelled job no longer sweeps; the expired entry stays until a
    // lazy get observes it.
    cache.set_record("club_stale", club("stale"));
    sleep(Duration::from_millis(1200)).await;
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn runner_starts_registered_jobs() {
    let cache = Arc::new(DirectoryCache::new(Duration::from_millis(10)));
    cache.set_record("club_stale", club("stale"));

    JobRunner::new()
        .with_cache_sweep(CacheSweepJob::new(Arc::clone(&cache)).with_interval(1))
        .start()
        .await;

    sleep(Duration::from_millis(1200)).await;
    assert!(cache.is_empty());
}

use crate::cache::{keys, DirectoryCache};
use crate::ports::{ClubSource, FallbackSource};
use runclub_directory_domain::config::CacheConfig;
use runclub_directory_domain::ClubRecord;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Produces the authoritative record set, preferring the remote source but
/// guaranteeing a result even when it is unavailable.
///
/// Remote failures never cross this boundary: they degrade to the fallback
/// source, and a failing fallback degrades to the built-in seed set, so
/// resolution never fails and never returns an empty listing. Remote-sourced
/// sets are cached longer than fallback sets (higher trust in fresher data).
pub struct ClubResolver {
    remote: Arc<dyn ClubSource>,
    fallback: Arc<dyn FallbackSource>,
    cache: Arc<DirectoryCache>,
    ttls: CacheConfig,
}

impl ClubResolver {
    pub fn new(
        remote: Arc<dyn ClubSource>,
        fallback: Arc<dyn FallbackSource>,
        cache: Arc<DirectoryCache>,
        ttls: CacheConfig,
    ) -> Self {
        Self {
            remote,
            fallback,
            cache,
            ttls,
        }
    }

    pub fn cache(&self) -> &Arc<DirectoryCache> {
        &self.cache
    }

    /// The full record set, in whichever order the producing source returned.
    pub async fn resolve_all(&self) -> Arc<[ClubRecord]> {
        if let Some(clubs) = self.cache.get_list(keys::ALL_CLUBS) {
            debug!(count = clubs.len(), "Full listing served from cache");
            return clubs;
        }

        match self.remote.fetch_all().await {
            Ok(clubs) if !clubs.is_empty() => {
                info!(count = clubs.len(), "Resolved club listing from remote source");
                let clubs: Arc<[ClubRecord]> = Arc::from(clubs);
                self.cache
                    .set_list(keys::ALL_CLUBS, Arc::clone(&clubs), self.ttls.remote_ttl());
                return clubs;
            }
            Ok(_) => {
                warn!("Remote source returned no records, using fallback data");
            }
            Err(e) => {
                warn!(error = %e, "Remote source unavailable, using fallback data");
            }
        }

        let clubs = match self.fallback.load().await {
            Ok(clubs) if !clubs.is_empty() => clubs,
            Ok(_) => {
                warn!("Fallback data set is empty, using seed records");
                seed_clubs()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load fallback data, using seed records");
                seed_clubs()
            }
        };

        info!(count = clubs.len(), "Resolved club listing from fallback");
        let clubs: Arc<[ClubRecord]> = Arc::from(clubs);
        self.cache.set_list(
            keys::ALL_CLUBS,
            Arc::clone(&clubs),
            self.ttls.fallback_ttl(),
        );
        clubs
    }

    /// Look up one record by id. Found records are cached under their own
    /// key; misses are not (no negative caching), so a record that appears
    /// after the listing refreshes becomes findable immediately.
    pub async fn resolve_by_id(&self, id: &str) -> Option<Arc<ClubRecord>> {
        let key = keys::club_by_id(id);
        if let Some(club) = self.cache.get_record(&key) {
            return Some(club);
        }

        let clubs = self.resolve_all().await;
        let club = clubs.iter().find(|c| c.id == id)?;
        let club = Arc::new(club.clone());
        self.cache.set_record(key, Arc::clone(&club));
        Some(club)
    }

    /// Drop the cached listing and resolve again. Backs the sync endpoint.
    pub async fn refresh(&self) -> Arc<[ClubRecord]> {
        self.cache.remove(keys::ALL_CLUBS);
        self.resolve_all().await
    }
}

/// Last-resort records so the directory is never empty, even when both the
/// remote source and the bundled fallback fail.
pub fn seed_clubs() -> Vec<ClubRecord> {
    vec![
        ClubRecord {
            id: "fallback-1".to_string(),
            name: "Central Park Running Club".to_string(),
            category: "Athletic club".to_string(),
            site: None,
            phone: Some("(555) 123-4567".to_string()),
            email: Some("info@cprunning.com".to_string()),
            description: Some(
                "Join us for regular runs around Central Park with runners of all levels."
                    .to_string(),
            ),
            full_address: "1234 Central Park West, New York, NY 10025".to_string(),
            city: "New York".to_string(),
            postal_code: "10025".to_string(),
            latitude: 40.7829,
            longitude: -73.9654,
            rating: 4.5,
            reviews: 123,
            photo: None,
        },
        ClubRecord {
            id: "fallback-2".to_string(),
            name: "Brooklyn Bridge Runners".to_string(),
            category: "Athletic club".to_string(),
            site: None,
            phone: Some("(555) 987-6543".to_string()),
            email: Some("contact@bbrunners.org".to_string()),
            description: Some(
                "Experience the thrill of running across the iconic Brooklyn Bridge.".to_string(),
            ),
            full_address: "567 Brooklyn Heights Promenade, Brooklyn, NY 11201".to_string(),
            city: "Brooklyn".to_string(),
            postal_code: "11201".to_string(),
            latitude: 40.6962,
            longitude: -73.9969,
            rating: 4.2,
            reviews: 87,
            photo: None,
        },
    ]
}

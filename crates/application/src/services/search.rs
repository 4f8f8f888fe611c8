use crate::cache::{keys, DirectoryCache};
use crate::ports::ClubSource;
use crate::services::resolver::ClubResolver;
use runclub_directory_domain::config::CacheConfig;
use runclub_directory_domain::ClubRecord;
use std::sync::Arc;
use tracing::{debug, warn};

/// Substring search over the directory.
///
/// The remote source gets the first shot; its answer is accepted when
/// non-empty, or when both filters are empty (an intentionally empty global
/// listing is valid and must not trigger fallback). Otherwise the full
/// resolved set is filtered locally. Results are unordered; sorting belongs
/// to the route layer.
pub struct SearchService {
    resolver: Arc<ClubResolver>,
    remote: Arc<dyn ClubSource>,
    cache: Arc<DirectoryCache>,
    ttls: CacheConfig,
}

impl SearchService {
    pub fn new(
        resolver: Arc<ClubResolver>,
        remote: Arc<dyn ClubSource>,
        cache: Arc<DirectoryCache>,
        ttls: CacheConfig,
    ) -> Self {
        Self {
            resolver,
            remote,
            cache,
            ttls,
        }
    }

    pub async fn search(&self, query: &str, location: &str) -> Arc<[ClubRecord]> {
        let key = keys::search_results(query, location);
        if let Some(clubs) = self.cache.get_list(&key) {
            debug!(query, location, count = clubs.len(), "Search served from cache");
            return clubs;
        }

        match self.remote.search(query, location).await {
            Ok(results) if !results.is_empty() || (query.is_empty() && location.is_empty()) => {
                debug!(
                    query,
                    location,
                    count = results.len(),
                    "Search served by remote source"
                );
                let results: Arc<[ClubRecord]> = Arc::from(results);
                self.cache
                    .set_list(key, Arc::clone(&results), self.ttls.remote_search_ttl());
                return results;
            }
            Ok(_) => {
                debug!(query, location, "Remote search empty, filtering locally");
            }
            Err(e) => {
                warn!(error = %e, "Remote search unavailable, filtering locally");
            }
        }

        let clubs = self.resolver.resolve_all().await;
        let filtered: Vec<ClubRecord> = clubs
            .iter()
            .filter(|club| matches_query(club, query) && matches_location(club, location))
            .cloned()
            .collect();

        debug!(query, location, count = filtered.len(), "Search filtered locally");
        let filtered: Arc<[ClubRecord]> = Arc::from(filtered);
        self.cache
            .set_list(key, Arc::clone(&filtered), self.ttls.local_search_ttl());
        filtered
    }
}

/// A record matches an empty query, or a case-insensitive substring of its
/// name, description, or category.
pub fn matches_query(club: &ClubRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    club.name.to_lowercase().contains(&query)
        || club
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&query))
        || club.category.to_lowercase().contains(&query)
}

/// A record matches an empty location, a case-insensitive substring match
/// against city, postal code, or full address, or a location string that
/// itself contains the record's city ("Brooklyn, NY" still matches city
/// "Brooklyn").
pub fn matches_location(club: &ClubRecord, location: &str) -> bool {
    if location.is_empty() {
        return true;
    }
    let location = location.to_lowercase();
    let city = club.city.to_lowercase();
    city.contains(&location)
        || club.postal_code.to_lowercase().contains(&location)
        || club.full_address.to_lowercase().contains(&location)
        || location.contains(&city)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::resolver::seed_clubs;

    fn bridge_club() -> ClubRecord {
        seed_clubs().remove(1)
    }

    #[test]
    fn empty_filters_match_everything() {
        let club = bridge_club();
        assert!(matches_query(&club, ""));
        assert!(matches_location(&club, ""));
    }

    #[test]
    fn query_matches_name_description_and_category() {
        let club = bridge_club();
        assert!(matches_query(&club, "BRIDGE"));
        assert!(matches_query(&club, "iconic"));
        assert!(matches_query(&club, "athletic"));
        assert!(!matches_query(&club, "triathlon"));
    }

    #[test]
    fn location_matches_city_postal_and_address() {
        let club = bridge_club();
        assert!(matches_location(&club, "brooklyn"));
        assert!(matches_location(&club, "11201"));
        assert!(matches_location(&club, "promenade"));
        assert!(!matches_location(&club, "queens"));
    }

    #[test]
    fn location_superstring_containing_city_matches() {
        let club = bridge_club();
        assert!(matches_location(&club, "Brooklyn, NY"));
    }
}

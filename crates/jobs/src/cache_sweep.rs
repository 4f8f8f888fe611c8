use runclub_directory_application::cache::DirectoryCache;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodic sweep of expired cache entries.
///
/// Lazy eviction only removes entries that are read again; keys that are
/// never re-requested (one-off search filters, stale ids) would otherwise
/// accumulate for the life of the process. The sweep runs on a fixed
/// interval and is re-entrant with concurrent get/set calls.
pub struct CacheSweepJob {
    cache: Arc<DirectoryCache>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(cache: Arc<DirectoryCache>) -> Self {
        Self {
            cache,
            interval_secs: 600,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache sweep job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            // The first tick fires immediately; skip it so a sweep never
            // races startup resolution.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.cache.cleanup();
                        if removed > 0 {
                            info!(removed, remaining = self.cache.len(), "Cache sweep completed");
                        } else {
                            debug!("Cache sweep found nothing to remove");
                        }
                    }
                }
            }
        });
    }
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache TTLs and sweep scheduling.
///
/// Remote-sourced data is trusted longer than fallback data, so the two
/// provenances carry different TTLs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Default TTL for entries stored without an explicit TTL (seconds).
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: u64,

    /// TTL for the full record set when the remote source produced it.
    #[serde(default = "default_remote_ttl_secs")]
    pub remote_ttl_secs: u64,

    /// TTL for the full record set when the fallback produced it.
    #[serde(default = "default_fallback_ttl_secs")]
    pub fallback_ttl_secs: u64,

    /// TTL for search results served by the remote source.
    #[serde(default = "default_ttl_secs")]
    pub remote_search_ttl_secs: u64,

    /// TTL for search results computed by local filtering.
    #[serde(default = "default_fallback_ttl_secs")]
    pub local_search_ttl_secs: u64,

    /// Interval between periodic sweeps of expired entries.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

fn default_ttl_secs() -> u64 {
    300
}

fn default_remote_ttl_secs() -> u64 {
    600
}

fn default_fallback_ttl_secs() -> u64 {
    120
}

fn default_sweep_interval_secs() -> u64 {
    600
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: default_ttl_secs(),
            remote_ttl_secs: default_remote_ttl_secs(),
            fallback_ttl_secs: default_fallback_ttl_secs(),
            remote_search_ttl_secs: default_ttl_secs(),
            local_search_ttl_secs: default_fallback_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

impl CacheConfig {
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }

    pub fn remote_ttl(&self) -> Duration {
        Duration::from_secs(self.remote_ttl_secs)
    }

    pub fn fallback_ttl(&self) -> Duration {
        Duration::from_secs(self.fallback_ttl_secs)
    }

    pub fn remote_search_ttl(&self) -> Duration {
        Duration::from_secs(self.remote_search_ttl_secs)
    }

    pub fn local_search_ttl(&self) -> Duration {
        Duration::from_secs(self.local_search_ttl_secs)
    }
}

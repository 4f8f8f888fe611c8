pub mod cache;
pub mod club;
pub mod health;
pub mod regions;
pub mod search;
pub mod sync;

pub use cache::CacheStatsResponse;
pub use club::{ClubResponse, ClubsResponse, ErrorResponse};
pub use health::HealthResponse;
pub use regions::{RegionCountEntry, RegionCountsResponse};
pub use search::{SearchParams, SearchResponse};
pub use sync::SyncResponse;

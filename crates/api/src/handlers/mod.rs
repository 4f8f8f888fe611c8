pub mod cache;
pub mod clubs;
pub mod health;
pub mod regions;
pub mod search;
pub mod sync;

pub use cache::get_cache_stats;
pub use clubs::{get_club, get_clubs, get_featured_clubs};
pub use health::health_check;
pub use regions::get_region_counts;
pub use search::search_clubs;
pub use sync::sync_clubs;

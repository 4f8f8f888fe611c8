pub mod directory;
pub mod entry;
pub mod keys;
pub mod store;

pub use directory::{CachedValue, DirectoryCache};
pub use entry::CacheEntry;
pub use store::ExpiringCache;

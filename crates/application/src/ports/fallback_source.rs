use async_trait::async_trait;
use runclub_directory_domain::{ClubRecord, DirectoryError};

/// Local fallback data provider, used when the remote source fails or
/// returns nothing. Loaded in full on each resolution attempt.
#[async_trait]
pub trait FallbackSource: Send + Sync {
    async fn load(&self) -> Result<Vec<ClubRecord>, DirectoryError>;
}

use async_trait::async_trait;
use runclub_directory_domain::{ClubRecord, DirectoryError};

/// Remote club data provider.
///
/// Failures are values: the resolver's fallback decision is an explicit
/// branch on the returned `Result`, never a caught panic. An empty `Ok`
/// result is a valid answer and is interpreted by the caller.
#[async_trait]
pub trait ClubSource: Send + Sync {
    /// Fetch every record the source knows about, in source order.
    async fn fetch_all(&self) -> Result<Vec<ClubRecord>, DirectoryError>;

    /// Search the source with text and location filters. Empty strings mean
    /// "no filter" for that predicate.
    async fn search(&self, query: &str, location: &str)
        -> Result<Vec<ClubRecord>, DirectoryError>;
}

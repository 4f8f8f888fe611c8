use async_trait::async_trait;
use runclub_directory_application::ports::FallbackSource;
use runclub_directory_domain::config::FallbackConfig;
use runclub_directory_domain::{ClubRecord, DirectoryError};
use std::path::PathBuf;
use tracing::debug;

/// Static data set compiled into the binary so the directory still has real
/// content when the remote source is down on a fresh deployment.
const BUNDLED_DATA: &str = include_str!("../../data/clubs-fallback.json");

/// Local fallback source: the bundled JSON data set, optionally overridden by
/// a file on disk. Loaded in full on each resolution attempt; parse failures
/// propagate so the resolver can degrade to its seed records.
pub struct BundledFallbackSource {
    path: Option<PathBuf>,
}

impl BundledFallbackSource {
    pub fn new(config: &FallbackConfig) -> Self {
        Self {
            path: config.data_path.as_ref().map(PathBuf::from),
        }
    }

    pub fn bundled() -> Self {
        Self { path: None }
    }
}

#[async_trait]
impl FallbackSource for BundledFallbackSource {
    async fn load(&self) -> Result<Vec<ClubRecord>, DirectoryError> {
        let raw = match &self.path {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| DirectoryError::Io(format!("{}: {e}", path.display())))?,
            None => BUNDLED_DATA.to_string(),
        };

        let clubs: Vec<ClubRecord> = serde_json::from_str(&raw)
            .map_err(|e| DirectoryError::MalformedRecord(e.to_string()))?;

        debug!(count = clubs.len(), "Loaded fallback club data");
        Ok(clubs)
    }
}

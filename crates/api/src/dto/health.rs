use serde::Serialize;

/// Presence flags only; configuration values never leave the process.
#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: &'static str,
    pub remote_source_configured: bool,
}

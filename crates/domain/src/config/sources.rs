use serde::{Deserialize, Serialize};

/// Remote spreadsheet source settings.
///
/// The directory is read from a Google Sheet published through the Sheets v4
/// values API. When `sheet_id` or `api_key` is missing the remote source is
/// considered unconfigured and every resolution goes straight to the fallback.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SheetsConfig {
    #[serde(default)]
    pub sheet_id: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,

    /// A1 range covering the header row plus data rows.
    #[serde(default = "default_range")]
    pub range: String,

    /// Request timeout in seconds; expiry is treated as a remote failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_range() -> String {
    "Clubs!A1:Z".to_string()
}

fn default_timeout_secs() -> u64 {
    8
}

impl SheetsConfig {
    pub fn is_configured(&self) -> bool {
        self.sheet_id.is_some() && self.api_key.is_some()
    }
}

/// Local fallback data settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FallbackConfig {
    /// Optional path to a JSON file overriding the bundled data set.
    #[serde(default)]
    pub data_path: Option<String>,
}

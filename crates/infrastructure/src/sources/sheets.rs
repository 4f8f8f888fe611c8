use async_trait::async_trait;
use runclub_directory_application::ports::ClubSource;
use runclub_directory_application::services::search::{matches_location, matches_query};
use runclub_directory_domain::config::SheetsConfig;
use runclub_directory_domain::{ClubRecord, DirectoryError};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Shape of a Sheets v4 `values.get` response.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Remote club source backed by a Google Sheet exposed through the Sheets v4
/// values API.
///
/// Requests carry a bounded timeout; expiry and transport errors both surface
/// as `SourceUnavailable`/`Timeout` so the resolver can fall back. Rows
/// missing required fields are skipped with a warning rather than aborting
/// the whole fetch.
pub struct SheetsClubSource {
    http: reqwest::Client,
    sheet_id: Option<String>,
    api_key: Option<String>,
    range: String,
}

impl SheetsClubSource {
    pub fn new(config: &SheetsConfig) -> Result<Self, DirectoryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DirectoryError::Io(e.to_string()))?;

        Ok(Self {
            http,
            sheet_id: config.sheet_id.clone(),
            api_key: config.api_key.clone(),
            range: config.range.clone(),
        })
    }

    async fn fetch_rows(&self) -> Result<Vec<Vec<Value>>, DirectoryError> {
        let (Some(sheet_id), Some(api_key)) = (self.sheet_id.as_deref(), self.api_key.as_deref())
        else {
            return Err(DirectoryError::SourceUnavailable(
                "sheets source not configured".to_string(),
            ));
        };

        let url = format!("{SHEETS_API_BASE}/{sheet_id}/values/{}", self.range);
        let response = self
            .http
            .get(&url)
            .query(&[("key", api_key)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = response
            .error_for_status()
            .map_err(|e| DirectoryError::SourceUnavailable(e.to_string()))?;

        let range: ValueRange = response
            .json()
            .await
            .map_err(|e| DirectoryError::SourceUnavailable(e.to_string()))?;

        Ok(range.values)
    }
}

fn map_transport_error(e: reqwest::Error) -> DirectoryError {
    if e.is_timeout() {
        DirectoryError::Timeout
    } else {
        DirectoryError::SourceUnavailable(e.to_string())
    }
}

#[async_trait]
impl ClubSource for SheetsClubSource {
    async fn fetch_all(&self) -> Result<Vec<ClubRecord>, DirectoryError> {
        let rows = self.fetch_rows().await?;
        let mut rows = rows.into_iter();

        let Some(header) = rows.next() else {
            return Ok(Vec::new());
        };
        let columns = column_index(&header);

        let mut clubs = Vec::new();
        for (i, row) in rows.enumerate() {
            match parse_row(&columns, &row) {
                Ok(club) => clubs.push(club),
                Err(e) => {
                    // Data-entry mistakes in the sheet must not take the
                    // directory down; skip the row and keep going.
                    warn!(row = i + 2, error = %e, "Skipping malformed sheet row");
                }
            }
        }

        debug!(count = clubs.len(), "Fetched clubs from sheet");
        Ok(clubs)
    }

    async fn search(
        &self,
        query: &str,
        location: &str,
    ) -> Result<Vec<ClubRecord>, DirectoryError> {
        let clubs = self.fetch_all().await?;
        Ok(clubs
            .into_iter()
            .filter(|club| matches_query(club, query) && matches_location(club, location))
            .collect())
    }
}

/// Map header names (case-insensitive) to column positions.
fn column_index(header: &[Value]) -> HashMap<String, usize> {
    header
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| cell.as_str().map(|name| (name.trim().to_lowercase(), i)))
        .collect()
}

fn parse_row(
    columns: &HashMap<String, usize>,
    row: &[Value],
) -> Result<ClubRecord, DirectoryError> {
    let required = |name: &str| -> Result<String, DirectoryError> {
        cell_string(columns, row, name)
            .ok_or_else(|| DirectoryError::MalformedRecord(format!("missing column '{name}'")))
    };

    Ok(ClubRecord {
        id: required("id")?,
        name: required("name")?,
        category: cell_string(columns, row, "category")
            .unwrap_or_else(|| "Athletic club".to_string()),
        site: cell_string(columns, row, "site"),
        phone: cell_string(columns, row, "phone"),
        email: cell_string(columns, row, "email_1"),
        description: cell_string(columns, row, "description"),
        full_address: required("full_address")?,
        city: required("city")?,
        postal_code: cell_string(columns, row, "postal_code").unwrap_or_default(),
        latitude: cell_f64(columns, row, "latitude"),
        longitude: cell_f64(columns, row, "longitude"),
        rating: cell_f64(columns, row, "rating"),
        reviews: cell_f64(columns, row, "reviews") as u32,
        photo: cell_string(columns, row, "photo"),
    })
}

/// Non-empty trimmed string at the named column, if any.
fn cell_string(columns: &HashMap<String, usize>, row: &[Value], name: &str) -> Option<String> {
    let cell = row.get(*columns.get(name)?)?;
    let text = match cell {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Numeric cell parsed leniently; unknown or unparseable values become 0,
/// which downstream consumers treat the same as "unknown".
fn cell_f64(columns: &HashMap<String, usize>, row: &[Value], name: &str) -> f64 {
    match columns.get(name).and_then(|i| row.get(*i)) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

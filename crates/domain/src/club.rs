use serde::{Deserialize, Serialize};

/// A single club listing as resolved from the remote spreadsheet or the
/// bundled fallback data set.
///
/// `rating` and `reviews` default to zero when the source omits them; zero is
/// a legitimate value and consumers must not treat it as an error. Optional
/// fields may be absent in either source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClubRecord {
    pub id: String,
    pub name: String,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, rename = "email_1", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub full_address: String,
    pub city: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,

    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

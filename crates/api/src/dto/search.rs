use super::club::ClubResponse;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_sort_order")]
    pub sort_order: String,
}

fn default_sort_by() -> String {
    "rating".to_string()
}

fn default_sort_order() -> String {
    "desc".to_string()
}

#[derive(Serialize, Debug, Clone)]
pub struct SearchResponse {
    pub clubs: Vec<ClubResponse>,
    pub total: usize,
    pub query: String,
    pub location: String,
}

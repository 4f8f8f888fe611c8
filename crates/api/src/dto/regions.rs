use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct RegionCountEntry {
    pub region: String,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct RegionCountsResponse {
    pub regions: Vec<RegionCountEntry>,
    pub total_clubs: usize,
}

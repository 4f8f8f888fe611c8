use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CacheStatsResponse {
    pub entries: usize,
}

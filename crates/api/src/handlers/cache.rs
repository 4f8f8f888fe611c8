use crate::{dto::CacheStatsResponse, state::AppState};
use axum::{extract::State, Json};

pub async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse {
        entries: state.cache.len(),
    })
}

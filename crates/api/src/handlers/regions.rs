use crate::{
    dto::{RegionCountEntry, RegionCountsResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_region_counts")]
pub async fn get_region_counts(State(state): State<AppState>) -> Json<RegionCountsResponse> {
    let counts = state.region_counts.execute_summary().await;
    let total_clubs = state.get_clubs.execute().await.len();
    debug!(regions = counts.len(), total_clubs, "Region counts computed");

    Json(RegionCountsResponse {
        regions: counts
            .into_iter()
            .map(|c| RegionCountEntry {
                region: c.region,
                count: c.count,
            })
            .collect(),
        total_clubs,
    })
}

use crate::{dto::SyncResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{info, instrument};

/// Force a fresh resolution from the remote source, bypassing the cached
/// listing. "Success" here means the directory has data, which resolution
/// guarantees; provenance is not reported.
#[instrument(skip(state), name = "api_sync_clubs")]
pub async fn sync_clubs(State(state): State<AppState>) -> Json<SyncResponse> {
    let count = state.refresh.execute().await;
    info!(count, "Directory refreshed");

    Json(SyncResponse {
        success: count > 0,
        count,
    })
}

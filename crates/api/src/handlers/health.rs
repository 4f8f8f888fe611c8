use crate::{dto::HealthResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::debug;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "healthy",
        remote_source_configured: state.sheets_configured,
    })
}

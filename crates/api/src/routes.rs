use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/clubs", get(handlers::get_clubs))
        .route("/clubs/featured", get(handlers::get_featured_clubs))
        .route("/clubs/{id}", get(handlers::get_club))
        .route("/search", get(handlers::search_clubs))
        .route("/regions", get(handlers::get_region_counts))
        .route("/sync", post(handlers::sync_clubs))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .with_state(state)
}

use crate::{
    dto::{ClubResponse, ClubsResponse, ErrorResponse},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_clubs")]
pub async fn get_clubs(State(state): State<AppState>) -> Json<ClubsResponse> {
    let clubs = state.get_clubs.execute().await;
    debug!(count = clubs.len(), "Club listing retrieved");

    Json(ClubsResponse {
        clubs: clubs.iter().map(ClubResponse::from).collect(),
    })
}

#[instrument(skip(state), name = "api_get_club")]
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.get_club.execute(&id).await {
        Some(club) => (StatusCode::OK, Json(ClubResponse::from(club.as_ref()))).into_response(),
        None => {
            debug!(id, "Club not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Club not found".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct FeaturedParams {
    pub limit: Option<usize>,
}

#[instrument(skip(state), name = "api_get_featured")]
pub async fn get_featured_clubs(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Json<ClubsResponse> {
    let clubs = state.get_featured.execute(params.limit).await;
    debug!(count = clubs.len(), "Featured clubs retrieved");

    Json(ClubsResponse {
        clubs: clubs.iter().map(ClubResponse::from).collect(),
    })
}

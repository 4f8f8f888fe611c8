use crate::{
    dto::{ClubResponse, SearchParams, SearchResponse},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use runclub_directory_domain::ClubRecord;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Search with text and location filters. The engine returns an unordered
/// set; ordering is applied here per the caller's sort parameters.
#[instrument(skip(state), name = "api_search_clubs")]
pub async fn search_clubs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    debug!(
        query = %params.q,
        location = %params.location,
        "Searching clubs"
    );

    let results = state.search_clubs.execute(&params.q, &params.location).await;
    let mut clubs: Vec<ClubRecord> = results.to_vec();
    sort_clubs(&mut clubs, &params.sort_by, &params.sort_order);

    debug!(count = clubs.len(), "Search completed");
    Json(SearchResponse {
        total: clubs.len(),
        clubs: clubs.iter().map(ClubResponse::from).collect(),
        query: params.q,
        location: params.location,
    })
}

fn sort_clubs(clubs: &mut [ClubRecord], sort_by: &str, sort_order: &str) {
    let compare: fn(&ClubRecord, &ClubRecord) -> Ordering = match sort_by {
        "reviews" => |a, b| a.reviews.cmp(&b.reviews),
        "name" => |a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        // "rating" and anything unrecognized
        _ => |a, b| a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
    };

    if sort_order == "asc" {
        clubs.sort_by(compare);
    } else {
        clubs.sort_by(|a, b| compare(b, a));
    }
}

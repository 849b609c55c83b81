use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use super::dto::{DiscoverQuery, GenreQuery};
use super::service::TmdbService;
use crate::common::response::ApiError;
use crate::state::AppState;

/// List movie genres
#[utoipa::path(
    get,
    path = "/tmdb/genres",
    params(GenreQuery),
    responses(
        (status = 200, description = "TMDB genre list, relayed verbatim"),
        (status = 500, description = "Upstream unreachable or timed out")
    ),
    tag = "TMDB"
)]
pub async fn genres(
    State(state): State<AppState>,
    Query(query): Query<GenreQuery>,
) -> impl IntoResponse {
    match TmdbService::genres(state, query).await {
        Ok(reply) => reply.into_response(),
        Err(e) => {
            error!("TMDB genre request failed: {}", e);
            ApiError(
                "Internal Server Error".to_string(),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response()
        }
    }
}

/// Discover movies by genre and release year
#[utoipa::path(
    get,
    path = "/tmdb/discover",
    params(DiscoverQuery),
    responses(
        (status = 200, description = "TMDB discover page, relayed verbatim"),
        (status = 400, description = "Missing genre_id or year"),
        (status = 500, description = "Upstream unreachable or timed out")
    ),
    tag = "TMDB"
)]
pub async fn discover(
    State(state): State<AppState>,
    Query(query): Query<DiscoverQuery>,
) -> impl IntoResponse {
    match TmdbService::discover(state, query).await {
        Ok(reply) => reply.into_response(),
        Err(e) => {
            error!("TMDB discover request failed: {}", e);
            ApiError(
                "Internal Server Error".to_string(),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response()
        }
    }
}

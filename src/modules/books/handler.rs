use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use super::dto::BookQuery;
use super::service::BooksService;
use crate::common::response::ApiError;
use crate::state::AppState;

/// Search book volumes by subject
#[utoipa::path(
    get,
    path = "/books/search",
    params(BookQuery),
    responses(
        (status = 200, description = "Google Books volume list, relayed verbatim"),
        (status = 400, description = "Missing subject"),
        (status = 500, description = "Upstream unreachable or timed out")
    ),
    tag = "Books"
)]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> impl IntoResponse {
    match BooksService::search(state, query).await {
        Ok(reply) => reply.into_response(),
        Err(e) => {
            error!("Google Books search request failed: {}", e);
            ApiError(
                "Internal Server Error".to_string(),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response()
        }
    }
}

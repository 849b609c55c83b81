use axum::{Json, Router, routing::get};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HomeResponse {
    pub message: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Proxy is up", body = HomeResponse)
    ),
    tag = "Health"
)]
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "✅ Proxy Server is running successfully on Render!".to_string(),
    })
}

pub fn configure_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(home))
        .nest("/tmdb", crate::modules::tmdb::router())
        .nest("/books", crate::modules::books::router())
        .layer(cors)
}

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::home,
        crate::modules::tmdb::handler::genres,
        crate::modules::tmdb::handler::discover,
        crate::modules::books::handler::search,
    ),
    components(
        schemas(
            crate::routes::HomeResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "TMDB", description = "Movie metadata proxy endpoints"),
        (name = "Books", description = "Google Books proxy endpoints")
    )
)]
pub struct ApiDoc;

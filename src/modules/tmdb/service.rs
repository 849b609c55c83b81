use tracing::info;

use super::dto::{DiscoverQuery, GenreQuery};
use crate::common::error::ProxyError;
use crate::common::http::upstream_client;
use crate::common::response::ProxyReply;
use crate::state::AppState;

pub struct TmdbService;

impl TmdbService {
    pub async fn genres(state: AppState, query: GenreQuery) -> Result<ProxyReply, ProxyError> {
        let url = format!("{}/genre/movie/list", state.config.tmdb_base_url);
        info!("Forwarding genre list request (language={})", query.language);

        let response = upstream_client()?
            .get(&url)
            .query(&[
                ("api_key", state.config.tmdb_api_key.as_str()),
                ("language", query.language.as_str()),
            ])
            .send()
            .await?;

        Ok(ProxyReply::from_upstream(response).await?)
    }

    pub async fn discover(state: AppState, query: DiscoverQuery) -> Result<ProxyReply, ProxyError> {
        let url = format!("{}/discover/movie", state.config.tmdb_base_url);
        info!(
            "Forwarding discover request (genre_id={}, year={}, page={})",
            query.genre_id, query.year, query.page
        );

        let response = upstream_client()?
            .get(&url)
            .query(&[
                ("api_key", state.config.tmdb_api_key.clone()),
                ("with_genres", query.genre_id.to_string()),
                ("primary_release_year", query.year.to_string()),
                ("language", query.language.clone()),
                ("sort_by", "popularity.desc".to_string()),
                ("page", query.page.to_string()),
            ])
            .send()
            .await?;

        Ok(ProxyReply::from_upstream(response).await?)
    }
}

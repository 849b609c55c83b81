use tracing::info;

use super::dto::BookQuery;
use crate::common::error::ProxyError;
use crate::common::http::upstream_client;
use crate::common::response::ProxyReply;
use crate::state::AppState;

pub struct BooksService;

impl BooksService {
    /// `query.year` is deliberately not forwarded; the upstream call is the
    /// same with or without it.
    pub async fn search(state: AppState, query: BookQuery) -> Result<ProxyReply, ProxyError> {
        let url = format!("{}/volumes", state.config.google_books_base_url);
        info!(
            "Forwarding volume search (subject={}, max_results={})",
            query.subject, query.max_results
        );

        let response = upstream_client()?
            .get(&url)
            .query(&[
                ("q", format!("subject:{}", query.subject)),
                ("maxResults", query.max_results.to_string()),
                ("orderBy", "relevance".to_string()),
                ("key", state.config.google_books_api_key.clone()),
                ("printType", "books".to_string()),
            ])
            .send()
            .await?;

        Ok(ProxyReply::from_upstream(response).await?)
    }
}

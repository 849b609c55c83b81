use crate::config::env::{self, EnvKey};

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const GOOGLE_BOOKS_BASE_URL: &str = "https://www.googleapis.com/books/v1";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub tmdb_api_key: String,
    pub google_books_api_key: String,
    pub tmdb_base_url: String,
    pub google_books_base_url: String,
}

impl AppConfig {
    /// Missing API keys are not rejected at startup; upstream calls made
    /// without them fail with the provider's own auth error instead.
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            tmdb_api_key: env::get_or(EnvKey::TmdbApiKey, ""),
            google_books_api_key: env::get_or(EnvKey::GoogleBooksApiKey, ""),
            tmdb_base_url: env::get_or(EnvKey::TmdbBaseUrl, TMDB_BASE_URL),
            google_books_base_url: env::get_or(EnvKey::GoogleBooksBaseUrl, GOOGLE_BOOKS_BASE_URL),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

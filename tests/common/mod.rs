//! Shared utilities for integration testing: a mock upstream that records
//! the query parameters it receives, plus a helper to boot the proxy on an
//! ephemeral port.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

use media_proxy::app::create_app;
use media_proxy::config::settings::AppConfig;
use media_proxy::state::AppState;

pub type RecordedQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Value,
    requests: RecordedQueries,
}

pub struct MockUpstream {
    pub base_url: String,
    requests: RecordedQueries,
}

impl MockUpstream {
    pub fn recorded(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(params);
    (state.status, Json(state.body.clone()))
}

/// Start a mock upstream on an ephemeral port that answers every request
/// with a fixed status and JSON body.
pub async fn start_mock_upstream(status: StatusCode, body: Value) -> MockUpstream {
    let requests: RecordedQueries = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body,
        requests: requests.clone(),
    };
    let app = Router::new().fallback(record).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream {
        base_url: format!("http://{}", addr),
        requests,
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        tmdb_api_key: "tmdb-test-key".to_string(),
        google_books_api_key: "books-test-key".to_string(),
        tmdb_base_url: String::new(),
        google_books_base_url: String::new(),
    }
}

/// Boot the proxy on an ephemeral port and return its base URL.
pub async fn spawn_proxy(config: AppConfig) -> String {
    let app = create_app(AppState::new(config)).await;
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

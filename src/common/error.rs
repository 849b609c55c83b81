use thiserror::Error;

/// Failure of the single outbound call a proxied request makes. Covers
/// client construction, connect errors and the 15s timeout; upstream
/// non-2xx responses are not errors and are relayed as-is.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

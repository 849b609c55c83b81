use std::time::Duration;

use crate::common::error::ProxyError;

pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// A fresh client per outbound call; the proxy keeps no connection pool
/// across requests.
pub fn upstream_client() -> Result<reqwest::Client, ProxyError> {
    Ok(reqwest::Client::builder().timeout(UPSTREAM_TIMEOUT).build()?)
}

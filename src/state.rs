//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the one pooled `reqwest::Client` used for every proxied call and
//! the upstream API base URL. Both are cheap to clone.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;
use crate::proxy::ProxyError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Upstream API base, without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns `ProxyError::HttpClientBuild` if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &HostConfig) -> Result<Self, ProxyError> {
        let mut builder = reqwest::Client::builder().connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS));
        if config.api_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.api_timeout_secs));
        }
        let http = builder.build().map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upstream: Arc::from(config.api_url.as_str()) })
    }
}

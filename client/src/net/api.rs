//! HTTP transport for resource cycles.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Server-side (SSR) and host tests: `send` is a stub that reports a network
//! failure, since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `send` only reports whether an HTTP response arrived. Status codes and
//! bodies are handed back untouched so `resource::interpret` can apply one
//! set of rules to every endpoint.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::resource::PreparedRequest;
#[cfg(feature = "hydrate")]
use crate::resource::Method;

/// Prefix for every API endpoint. Defaults to the host's same-origin proxy.
pub const API_BASE: &str = match option_env!("FLOW_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Client-side request timeout in milliseconds; `0` disables it.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Characters `encodeURIComponent` leaves alone.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Join the API base, endpoint path, and URL-encoded query pairs.
pub fn endpoint_url(base: &str, endpoint: &str, query: &[(&str, String)]) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), endpoint.trim_start_matches('/'));
    for (i, (key, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.extend(utf8_percent_encode(value, QUERY_VALUE));
    }
    url
}

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Why no HTTP response was obtained.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

/// Issue a prepared request and wait for the complete response body.
///
/// # Errors
///
/// Returns `SendError` if the request could not be built or sent, the body
/// could not be read, or the timeout elapsed first.
pub async fn send(request: &PreparedRequest) -> Result<RawResponse, SendError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        builder = builder.header("Accept", "application/json");
        if let Some(auth) = &request.authorization {
            builder = builder.header("Authorization", auth);
        }
        let req = match &request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body.clone())
                .map_err(|e| SendError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| SendError::Network(e.to_string()))?,
        };

        let exchange = Box::pin(async move {
            let resp = req.send().await.map_err(|e| SendError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| SendError::Network(e.to_string()))?;
            Ok::<_, SendError>(RawResponse { status, body })
        });

        if REQUEST_TIMEOUT_MS == 0 {
            return exchange.await;
        }
        let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
        match select(exchange, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(SendError::Timeout(REQUEST_TIMEOUT_MS)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SendError::Network("not available on server".to_owned()))
    }
}

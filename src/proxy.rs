//! Same-origin relay to the upstream Flow Innovation API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls `/api/<path>` on this host; `forward` replays the call
//! against `FLOW_API_URL/<path>` and hands the upstream status and body back
//! untouched. Authentication stays with the upstream API: the bearer token
//! is passed through, never inspected.
//!
//! ERROR HANDLING
//! ==============
//! Only failures to obtain an upstream response are errors here. They are
//! rendered as `{ "error": "..." }` so the client reads them through the same
//! error-envelope rule as upstream errors.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers relayed to the upstream API.
const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The upstream API could not be reached or dropped the connection.
    #[error("upstream API unreachable: {0}")]
    Unreachable(String),

    /// The upstream API did not answer within the configured timeout.
    #[error("upstream API timed out")]
    Timeout,
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Join the upstream base, the captured path and the raw query string.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// `ANY /api/{*path}`: relay the request and return the upstream response.
///
/// # Errors
///
/// `ProxyError::Unreachable` / `ProxyError::Timeout` when no upstream
/// response was obtained.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &path, query.as_deref());

    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.inspect_err(|e| {
        tracing::warn!(%method, %url, error = %e, "upstream request failed");
    })?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %url, status = status.as_u16(), len = bytes.len(), "proxied");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

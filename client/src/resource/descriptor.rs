//! Declarative per-endpoint resource configuration.
//!
//! DESIGN
//! ======
//! A `ResourceDescriptor` says everything a view needs to know about one
//! endpoint: where it lives, how it is called, whether it needs the session
//! token, how user input becomes a request payload, and which field of the
//! response envelope holds the data. `prepare` and `interpret` are the two
//! pure halves of a cycle around the network call.

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod descriptor_test;

use serde_json::Value;

use super::{ResourceError, SESSION_EXPIRED_MESSAGE, UNAUTHORIZED_MESSAGE};
use crate::net::api;
use crate::state::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Request payload produced by a descriptor's `validate` step.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    None,
    Query(Vec<(&'static str, String)>),
    Json(Value),
}

/// Static description of one remote resource.
pub struct ResourceDescriptor<I, T> {
    /// Short name used in logs.
    pub name: &'static str,
    /// Path relative to the API base, e.g. `/check_claim`.
    pub endpoint: &'static str,
    pub method: Method,
    /// Attach the session token and refuse to run without one.
    pub authorized: bool,
    /// Check user input and turn it into a payload. The error string is
    /// shown to the user as a validation error.
    pub validate: fn(&I) -> Result<Payload, String>,
    /// Pull the typed data out of a JSON object body. The error string is
    /// shown to the user as a schema error.
    pub extract: fn(&Value) -> Result<T, String>,
}

/// A request that passed every precondition and is ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    /// Full `Authorization` header value, when the resource is protected.
    pub authorization: Option<String>,
    /// Serialized JSON body for `Payload::Json`.
    pub body: Option<String>,
}

/// Run the preconditions for one trigger.
///
/// Authorization is checked before input validation so a logged-out user
/// always sees the login prompt first.
///
/// # Errors
///
/// `Unauthorized` when the resource is protected and the session has no
/// token; `Validation` when the descriptor rejects the input.
pub fn prepare<I, T>(
    descriptor: &ResourceDescriptor<I, T>,
    session: &Session,
    input: &I,
) -> Result<PreparedRequest, ResourceError> {
    let authorization = if descriptor.authorized {
        match session.bearer() {
            Some(header) => Some(header),
            None => return Err(ResourceError::Unauthorized(UNAUTHORIZED_MESSAGE.to_owned())),
        }
    } else {
        None
    };

    let payload = (descriptor.validate)(input).map_err(ResourceError::Validation)?;
    let (query, body) = match payload {
        Payload::None => (Vec::new(), None),
        Payload::Query(pairs) => (pairs, None),
        Payload::Json(value) => (Vec::new(), Some(value.to_string())),
    };

    Ok(PreparedRequest {
        method: descriptor.method,
        url: api::endpoint_url(api::API_BASE, descriptor.endpoint, &query),
        authorization,
        body,
    })
}

/// Map an HTTP status and raw body to the resource outcome.
///
/// # Errors
///
/// - non-2xx: `Unauthorized` for 401 on a protected resource, otherwise
///   `Transport`, preferring the body's `error` field as the message.
/// - 2xx with a body that is not a JSON object, or that `extract` rejects:
///   `Schema`.
/// - 2xx object carrying an `error` field: `Transport` with that message.
pub fn interpret<I, T>(descriptor: &ResourceDescriptor<I, T>, status: u16, body: &str) -> Result<T, ResourceError> {
    let parsed = serde_json::from_str::<Value>(body).ok();

    if !(200..300).contains(&status) {
        let server_message = parsed.as_ref().and_then(error_field);
        if status == 401 && descriptor.authorized {
            return Err(ResourceError::Unauthorized(
                server_message.unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_owned()),
            ));
        }
        return Err(ResourceError::Transport(server_message.unwrap_or_else(|| status_failed_message(status))));
    }

    let Some(value) = parsed else {
        return Err(ResourceError::Schema("The server response was not valid JSON.".to_owned()));
    };
    if !value.is_object() {
        return Err(ResourceError::Schema("Unexpected response shape: expected a JSON object.".to_owned()));
    }
    if let Some(message) = error_field(&value) {
        return Err(ResourceError::Transport(message));
    }

    (descriptor.extract)(&value).map_err(ResourceError::Schema)
}

/// The `error` field of an error envelope, when it is a non-empty string or
/// an object with a `message`.
pub fn error_field(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => map.get("message").and_then(Value::as_str).map(str::to_owned),
        _ => None,
    }
}

fn status_failed_message(status: u16) -> String {
    format!("Request failed (HTTP {status}).")
}

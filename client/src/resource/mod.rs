//! Remote resource state shared by every data-backed view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page that talks to the API drives one or more resources through the
//! same `idle -> loading -> success | error` cycle. The pieces are split so
//! the logic stays host-testable:
//!
//! - `RemoteResource` / `ResourceError`: the observable state.
//! - `cycle`: supersession bookkeeping (last trigger wins).
//! - `descriptor`: per-endpoint configuration plus request preparation and
//!   response interpretation.
//! - `hook`: the Leptos glue that owns a signal and spawns requests.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod cycle;
pub mod descriptor;
pub mod hook;

pub use cycle::{ResourceCycle, Ticket};
pub use descriptor::{Method, Payload, PreparedRequest, ResourceDescriptor, interpret, prepare};
pub use hook::{RemoteResourceHandle, use_remote_resource};

/// Message shown when a protected resource is triggered without a token.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: please log in to continue.";
/// Message shown when the server rejects the stored token.
pub const SESSION_EXPIRED_MESSAGE: &str = "Unauthorized: your session has expired. Please log in again.";
/// Message shown when the request never produced an HTTP response.
pub const NETWORK_FAILURE_MESSAGE: &str = "Could not reach the server. Please try again.";
/// Message shown when the request outlived the client timeout.
pub const TIMEOUT_MESSAGE: &str = "The server took too long to respond. Please try again.";

/// Failure taxonomy for a resource cycle. Every variant carries the
/// user-facing message rendered at the view boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    /// Empty or malformed user input; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// Network failure or non-success HTTP status.
    #[error("{0}")]
    Transport(String),
    /// Response body did not have the expected shape.
    #[error("{0}")]
    Schema(String),
    /// Missing or rejected session token for a protected resource.
    #[error("{0}")]
    Unauthorized(String),
}

impl ResourceError {
    /// Short machine-readable kind, used for CSS modifiers and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Transport(_) => "transport",
            Self::Schema(_) => "schema",
            Self::Unauthorized(_) => "unauthorized",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Transport(m) | Self::Schema(m) | Self::Unauthorized(m) => m,
        }
    }
}

/// Coarse lifecycle status of a resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResourceStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Observable state of one resource. Data and error are carried by the
/// variant, so a success never has an error and vice versa.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RemoteResource<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(ResourceError),
}

impl<T> RemoteResource<T> {
    pub fn status(&self) -> ResourceStatus {
        match self {
            Self::Idle => ResourceStatus::Idle,
            Self::Loading => ResourceStatus::Loading,
            Self::Success(_) => ResourceStatus::Success,
            Self::Error(_) => ResourceStatus::Error,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ResourceError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T> From<Result<T, ResourceError>> for RemoteResource<T> {
    fn from(outcome: Result<T, ResourceError>) -> Self {
        match outcome {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err),
        }
    }
}

/// Payloads that can be "successfully empty".
pub trait Emptiable {
    fn is_empty_result(&self) -> bool;
}

impl<T> Emptiable for Vec<T> {
    fn is_empty_result(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiable for crate::net::types::GoalBoard {
    fn is_empty_result(&self) -> bool {
        self.goals.is_empty() && self.recommended.is_empty()
    }
}

impl Emptiable for crate::net::types::Insights {
    fn is_empty_result(&self) -> bool {
        self.next_milestone.is_none() && self.innovation_score.is_none() && self.suggestions.is_empty()
    }
}

/// What the rendering layer should show. `Empty` is a successful cycle with
/// nothing to list and is deliberately distinct from `Failed`.
#[derive(Clone, Debug, PartialEq)]
pub enum Presentation<T> {
    Idle,
    Loading,
    Empty,
    Ready(T),
    Failed(ResourceError),
}

impl<T: Emptiable> RemoteResource<T> {
    pub fn into_presentation(self) -> Presentation<T> {
        match self {
            Self::Idle => Presentation::Idle,
            Self::Loading => Presentation::Loading,
            Self::Success(data) if data.is_empty_result() => Presentation::Empty,
            Self::Success(data) => Presentation::Ready(data),
            Self::Error(err) => Presentation::Failed(err),
        }
    }
}

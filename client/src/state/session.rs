//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is provided once by `App` as an `RwSignal<Session>` context
//! and read by protected resources when they build requests. Only the login
//! and logout flows write it. The token is mirrored to localStorage under
//! `TOKEN_STORAGE_KEY` so a reload keeps the user signed in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::storage;

/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Client-held authentication token and its derived logged-in state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Build a session from a raw token; blank tokens count as logged out.
    pub fn from_token(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.trim().is_empty()) }
    }

    /// Rebuild the session from localStorage. Always logged out off-browser.
    pub fn restore() -> Self {
        Self::from_token(storage::load_string(TOKEN_STORAGE_KEY))
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` header value for protected requests.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

/// Get the session signal from context.
pub fn use_session() -> RwSignal<Session> {
    expect_context::<RwSignal<Session>>()
}

/// Start a session after a successful login and persist its token.
pub fn log_in(session: RwSignal<Session>, token: String) {
    storage::save_string(TOKEN_STORAGE_KEY, &token);
    session.set(Session::from_token(Some(token)));
}

/// End the session and forget the persisted token.
pub fn log_out(session: RwSignal<Session>) {
    storage::remove(TOKEN_STORAGE_KEY);
    session.set(Session::default());
}

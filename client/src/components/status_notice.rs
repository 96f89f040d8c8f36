//! Shared rendering for resource states.
//!
//! Every data-backed component funnels its `Presentation` through
//! `render_presentation`, so loading, empty and error states look the same
//! everywhere and an empty result never renders as a failure.

#[cfg(test)]
#[path = "status_notice_test.rs"]
mod status_notice_test;

use leptos::prelude::*;

use crate::resource::{Presentation, ResourceError};

/// Render one resource state. `ready` is only called for a non-empty success.
pub fn render_presentation<T>(
    presentation: Presentation<T>,
    loading_message: &'static str,
    empty_message: &'static str,
    ready: impl FnOnce(T) -> AnyView,
) -> AnyView {
    match presentation {
        Presentation::Idle => ().into_any(),
        Presentation::Loading => view! { <p class="status status--loading">{loading_message}</p> }.into_any(),
        Presentation::Empty => view! { <p class="status status--empty">{empty_message}</p> }.into_any(),
        Presentation::Ready(data) => ready(data),
        Presentation::Failed(error) => view! { <ErrorNotice error=error/> }.into_any(),
    }
}

/// CSS class list for an error notice, keyed by error kind.
pub fn error_class(error: &ResourceError) -> String {
    format!("status status--error status--{}", error.kind())
}

/// User-facing error line. Authorization failures add a login link.
#[component]
pub fn ErrorNotice(error: ResourceError) -> impl IntoView {
    let class = error_class(&error);
    let wants_login = matches!(error, ResourceError::Unauthorized(_));
    let message = error.message().to_owned();

    view! {
        <p class=class role="alert">
            {message}
            {wants_login.then(|| view! { " " <a href="/login">"Log in"</a> })}
        </p>
    }
}

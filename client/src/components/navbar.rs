//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once inside the router. Link set depends on the session: the
//! progress page and logout only appear for a logged-in user, login and
//! register only for a guest.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{log_out, use_session};

/// Navigation links as `(href, label)`, in display order.
pub fn nav_links(logged_in: bool) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("/", "Home"), ("/fact-check", "Fact Check"), ("/innovation-news", "Innovation News")];
    if logged_in {
        links.push(("/progress-tracking", "Progress"));
    }
    links.push(("/coming-soon", "Coming Soon"));
    if !logged_in {
        links.push(("/login", "Login"));
        links.push(("/register", "Register"));
    }
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <a href="/" class="navbar__logo">"Flow Innovation"</a>
                <ul class="navbar__links">
                    {move || {
                        nav_links(session.get().is_logged_in())
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <li class="navbar__item">
                                        <a href=href class="navbar__link">{label}</a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <Show when=move || session.get().is_logged_in()>
                    <LogoutButton/>
                </Show>
            </div>
        </nav>
    }
}

/// Clears the session and returns to the home page.
#[component]
fn LogoutButton() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        log_out(session);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <button class="btn navbar__logout" on:click=on_logout>
            "Logout"
        </button>
    }
}

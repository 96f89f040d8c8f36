//! Username + password login page.
//!
//! A successful login stores the token in the session (and localStorage)
//! and moves on to the progress dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_notice::ErrorNotice;
use crate::net::types::Credentials;
use crate::resource::{RemoteResource, use_remote_resource};
use crate::resources::LOGIN;
use crate::state::session::{log_in, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let login = use_remote_resource(&LOGIN);
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials { username: username.get_untracked(), password: password.get_untracked() };
        let navigate = navigate.clone();
        login.trigger_with(credentials, move |state| {
            if let RemoteResource::Success(token) = state {
                log_in(session, token.access_token.clone());
                password.set(String::new());
                navigate("/progress-tracking", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <CredentialFields username=username password=password/>
                    <button class="btn auth-button" type="submit" disabled=move || login.state().is_loading()>
                        {move || if login.state().is_loading() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                {move || login.state().error().cloned().map(|error| view! { <ErrorNotice error=error/> })}
                <p class="auth-card__switch">"No account yet? " <a href="/register">"Register"</a></p>
            </div>
        </div>
    }
}

/// Username and password inputs shared by the login and register pages.
#[component]
pub fn CredentialFields(username: RwSignal<String>, password: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="auth-label">
            "Username"
            <input
                class="auth-input"
                type="text"
                autocomplete="username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
        </label>
        <label class="auth-label">
            "Password"
            <input
                class="auth-input"
                type="password"
                autocomplete="current-password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
        </label>
    }
}

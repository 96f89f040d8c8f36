//! Account registration page. Success sends the user to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::login::CredentialFields;
use crate::components::status_notice::ErrorNotice;
use crate::net::types::Credentials;
use crate::resource::{RemoteResource, use_remote_resource};
use crate::resources::REGISTER;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let register = use_remote_resource(&REGISTER);
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials { username: username.get_untracked(), password: password.get_untracked() };
        let navigate = navigate.clone();
        register.trigger_with(credentials, move |state| {
            if matches!(state, RemoteResource::Success(_)) {
                password.set(String::new());
                navigate("/login", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <CredentialFields username=username password=password/>
                    <button class="btn auth-button" type="submit" disabled=move || register.state().is_loading()>
                        {move || if register.state().is_loading() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                {move || register.state().error().cloned().map(|error| view! { <ErrorNotice error=error/> })}
                <p class="auth-card__switch">"Already registered? " <a href="/login">"Login"</a></p>
            </div>
        </div>
    }
}

//! The current user's achievements and the form for adding one.

use leptos::prelude::*;

use super::status_notice::{ErrorNotice, render_presentation};
use crate::resource::{RemoteResource, use_remote_resource};
use crate::resources::{ADD_PROGRESS, PROGRESS};
use crate::state::session::use_session;

#[component]
pub fn UserProgress() -> impl IntoView {
    let session = use_session();
    let progress = use_remote_resource(&PROGRESS);
    let add_progress = use_remote_resource(&ADD_PROGRESS);
    let achievement = RwSignal::new(String::new());

    Effect::new(move || {
        session.track();
        progress.trigger(());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        add_progress.trigger_with(achievement.get_untracked(), move |state| {
            if matches!(state, RemoteResource::Success(_)) {
                achievement.set(String::new());
                progress.trigger(());
            }
        });
    };

    view! {
        <div class="user-progress">
            <h2 class="user-progress__title">"User Progress"</h2>
            <form class="user-progress__form" on:submit=on_submit>
                <input
                    class="user-progress__input"
                    type="text"
                    placeholder="Enter a new achievement"
                    prop:value=move || achievement.get()
                    on:input=move |ev| achievement.set(event_target_value(&ev))
                />
                <button class="btn user-progress__button" type="submit" disabled=move || add_progress.state().is_loading()>
                    "Add Progress"
                </button>
            </form>
            {move || add_progress.state().error().cloned().map(|error| view! { <ErrorNotice error=error/> })}
            {move || {
                render_presentation(
                    progress.state().into_presentation(),
                    "Loading progress...",
                    "No progress recorded yet.",
                    |entries| {
                        view! {
                            <ul class="user-progress__list">
                                {entries
                                    .into_iter()
                                    .map(|entry| view! { <li class="user-progress__item">{entry.achievement}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    },
                )
            }}
        </div>
    }
}

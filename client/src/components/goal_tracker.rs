//! Goal list plus the form for setting a new goal.
//!
//! Saving a goal re-fetches the list instead of appending locally, so the
//! view always shows what the server stored.

use leptos::prelude::*;

use super::status_notice::{ErrorNotice, render_presentation};
use crate::net::types::GoalBoard;
use crate::resource::{RemoteResource, use_remote_resource};
use crate::resources::{ADD_GOAL, GOALS};
use crate::state::session::use_session;
use crate::util::validate::GoalForm;

const GOAL_SAVED_MESSAGE: &str = "Goal successfully set!";

#[component]
pub fn GoalTracker() -> impl IntoView {
    let session = use_session();
    let goals = use_remote_resource(&GOALS);
    let add_goal = use_remote_resource(&ADD_GOAL);
    let goal = RwSignal::new(String::new());
    let target_date = RwSignal::new(String::new());
    let saved = RwSignal::new(None::<String>);

    Effect::new(move || {
        session.track();
        goals.trigger(());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        saved.set(None);
        let form = GoalForm { goal: goal.get_untracked(), target_date: target_date.get_untracked() };
        add_goal.trigger_with(form, move |state| {
            if let RemoteResource::Success(ack) = state {
                saved.set(Some(ack.message.clone().unwrap_or_else(|| GOAL_SAVED_MESSAGE.to_owned())));
                goal.set(String::new());
                target_date.set(String::new());
                goals.trigger(());
            }
        });
    };

    view! {
        <div class="goal-tracker">
            <h2 class="goal-tracker__title">"Goal Tracker"</h2>
            <form class="goal-tracker__form" on:submit=on_submit>
                <input
                    class="goal-tracker__input"
                    type="text"
                    placeholder="Enter your goal"
                    prop:value=move || goal.get()
                    on:input=move |ev| goal.set(event_target_value(&ev))
                />
                <input
                    class="goal-tracker__date"
                    type="date"
                    prop:value=move || target_date.get()
                    on:input=move |ev| target_date.set(event_target_value(&ev))
                />
                <button class="btn goal-tracker__button" type="submit" disabled=move || add_goal.state().is_loading()>
                    "Set Goal"
                </button>
            </form>
            {move || add_goal.state().error().cloned().map(|error| view! { <ErrorNotice error=error/> })}
            {move || saved.get().map(|message| view! { <p class="status status--saved">{message}</p> })}
            {move || {
                render_presentation(
                    goals.state().into_presentation(),
                    "Loading goals...",
                    "No goals set yet.",
                    |board| view! { <GoalList board=board/> }.into_any(),
                )
            }}
        </div>
    }
}

#[component]
fn GoalList(board: GoalBoard) -> impl IntoView {
    let GoalBoard { goals, recommended } = board;
    let recommended = (!recommended.is_empty()).then(|| {
        view! {
            <div class="goal-tracker__recommended">
                <h3>"Recommended goals"</h3>
                <ul>
                    {recommended.into_iter().map(|text| view! { <li>{text}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        }
    });

    view! {
        <div class="goal-tracker__board">
            <ul class="goal-tracker__list">
                {goals
                    .into_iter()
                    .map(|g| {
                        view! {
                            <li class="goal-tracker__item">
                                <span>{g.goal}</span>
                                {g.target_date.map(|d| view! { <span class="goal-tracker__due">" (by " {d} ")"</span> })}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            {recommended}
        </div>
    }
}

//! Insight summary computed by the API from the user's progress.

#[cfg(test)]
#[path = "progress_insights_test.rs"]
mod progress_insights_test;

use leptos::prelude::*;

use super::status_notice::render_presentation;
use crate::net::types::Insights;
use crate::resource::use_remote_resource;
use crate::resources::INSIGHTS;
use crate::state::session::use_session;

/// Suggestions joined for display.
pub fn suggestions_label(insights: &Insights) -> String {
    if insights.suggestions.is_empty() {
        "No suggestions yet".to_owned()
    } else {
        insights.suggestions.join(", ")
    }
}

#[component]
pub fn ProgressInsights() -> impl IntoView {
    let session = use_session();
    let insights = use_remote_resource(&INSIGHTS);

    Effect::new(move || {
        session.track();
        insights.trigger(());
    });

    view! {
        <div class="progress-insights">
            <h2 class="progress-insights__title">"Progress Insights"</h2>
            {move || {
                render_presentation(
                    insights.state().into_presentation(),
                    "Loading insights...",
                    "No insights yet.",
                    |summary| {
                        view! {
                            <div class="progress-insights__content">
                                <p><strong>"Next Milestone: "</strong>{summary.milestone_label()}</p>
                                <p><strong>"Innovation Score: "</strong>{summary.score_label()}</p>
                                <p><strong>"Suggestions: "</strong>{suggestions_label(&summary)}</p>
                            </div>
                        }
                        .into_any()
                    },
                )
            }}
        </div>
    }
}

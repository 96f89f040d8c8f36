//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Welcome to Flow Innovation"</h1>
            <p class="home-page__description">
                "Flow Innovation is a platform designed to help you uncover truth and explore groundbreaking innovations. "
                "Use the Fact Check tool to verify claims and the Innovation News section to stay updated on the latest global advancements."
            </p>
        </div>
    }
}

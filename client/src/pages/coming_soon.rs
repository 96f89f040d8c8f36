//! Static roadmap page.

#[cfg(test)]
#[path = "coming_soon_test.rs"]
mod coming_soon_test;

use leptos::prelude::*;

/// Upcoming features as `(feature, status)`.
pub const UPCOMING_FEATURES: &[(&str, &str)] = &[
    ("User Profile Management", "In Development"),
    ("Achievements Leaderboard", "Planned"),
    ("Real-Time Notifications", "In Planning"),
];

#[component]
pub fn ComingSoonPage() -> impl IntoView {
    view! {
        <div class="coming-soon">
            <h1 class="coming-soon__title">"Coming Soon"</h1>
            <p class="coming-soon__description">"Exciting features are on the way!"</p>
            <ul class="coming-soon__list">
                {UPCOMING_FEATURES
                    .iter()
                    .map(|(feature, status)| {
                        view! {
                            <li class="coming-soon__item">
                                {*feature}
                                " - "
                                <span class="coming-soon__status">{*status}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

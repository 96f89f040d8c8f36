//! Progress dashboard combining goals, achievements and insights.
//!
//! Every section is a protected resource. Without a session each one shows
//! its own login prompt instead of redirecting.

use leptos::prelude::*;

use crate::components::community_progress::CommunityProgress;
use crate::components::goal_tracker::GoalTracker;
use crate::components::progress_insights::ProgressInsights;
use crate::components::user_progress::UserProgress;

#[component]
pub fn ProgressTrackingPage() -> impl IntoView {
    view! {
        <div class="progress-tracking">
            <h2 class="progress-tracking__title">"Progress Tracking"</h2>
            <div class="progress-tracking__sections">
                <section class="progress-tracking__section"><GoalTracker/></section>
                <section class="progress-tracking__section"><UserProgress/></section>
                <section class="progress-tracking__section"><CommunityProgress/></section>
                <section class="progress-tracking__section"><ProgressInsights/></section>
            </div>
        </div>
    }
}

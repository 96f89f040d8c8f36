//! Claim fact-checking page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each search triggers the `claims` resource. A search issued while an
//! earlier one is in flight supersedes it, so the results always belong to
//! the last query typed.

use leptos::prelude::*;

use crate::components::results_box::ResultsBox;
use crate::components::search_bar::SearchBar;
use crate::components::status_notice::render_presentation;
use crate::net::types::ClaimVerdict;
use crate::resource::use_remote_resource;
use crate::resources::CLAIMS;

pub const NO_CLAIMS_MESSAGE: &str = "No fact checks found for this claim.";

#[component]
pub fn FactCheckPage() -> impl IntoView {
    let claims = use_remote_resource(&CLAIMS);
    let on_search = Callback::new(move |query: String| claims.trigger(query));

    view! {
        <div class="fact-check-page">
            <h1 class="fact-check-page__title">"Fact Check"</h1>
            <SearchBar on_search=on_search/>
            <div class="fact-check-page__results">
                {move || {
                    render_presentation(
                        claims.state().into_presentation(),
                        "Checking claim...",
                        NO_CLAIMS_MESSAGE,
                        |list| {
                            list.iter()
                                .map(|claim| view! { <ResultsBox verdict=ClaimVerdict::from(claim)/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        },
                    )
                }}
            </div>
        </div>
    }
}

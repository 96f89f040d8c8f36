//! One fact-check verdict card.

#[cfg(test)]
#[path = "results_box_test.rs"]
mod results_box_test;

use leptos::prelude::*;

use crate::net::types::ClaimVerdict;

#[component]
pub fn ResultsBox(verdict: ClaimVerdict) -> impl IntoView {
    let ClaimVerdict { text, claimant, rating, source_name, source_url } = verdict;
    let source = source_name.map(|name| {
        let label = format!("Source: {name}");
        match source_url {
            Some(url) => view! {
                <a class="results-box__source" href=url target="_blank" rel="noopener noreferrer">
                    {label}
                </a>
            }
            .into_any(),
            None => view! { <span class="results-box__source">{label}</span> }.into_any(),
        }
    });

    view! {
        <div class="results-box">
            <h3 class="results-box__title">"Fact Check Result"</h3>
            <p class="results-box__text">{text}</p>
            {claimant.map(|who| view! { <p class="results-box__claimant">"Claimed by: " {who}</p> })}
            <p class="results-box__rating">"Rating: " <strong>{rating}</strong></p>
            {source}
        </div>
    }
}

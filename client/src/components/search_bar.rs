//! Claim search form.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;

/// The query to submit, or `None` for blank input.
pub fn submitted_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Text input plus submit button. Blank submits are ignored; anything else
/// is handed to `on_search` trimmed.
#[component]
pub fn SearchBar(
    on_search: Callback<String>,
    #[prop(default = "Enter a claim to fact-check...")] placeholder: &'static str,
) -> impl IntoView {
    let input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(query) = submitted_query(&input.get_untracked()) {
            on_search.run(query);
        }
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                class="search-bar__input"
                type="text"
                placeholder=placeholder
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button class="btn search-bar__button" type="submit">
                "Search"
            </button>
        </form>
    }
}

//! Innovation news feed, fetched when the page mounts.

use leptos::prelude::*;

use crate::components::news_card::NewsCard;
use crate::components::status_notice::render_presentation;
use crate::resource::use_remote_resource;
use crate::resources::ARTICLES;

pub const NO_ARTICLES_MESSAGE: &str = "No innovation news right now.";

#[component]
pub fn InnovationNewsPage() -> impl IntoView {
    let articles = use_remote_resource(&ARTICLES);

    Effect::new(move || articles.trigger(()));

    view! {
        <div class="news-page">
            <h1 class="news-page__title">"Innovation News"</h1>
            <div class="news-page__grid">
                {move || {
                    render_presentation(
                        articles.state().into_presentation(),
                        "Loading news...",
                        NO_ARTICLES_MESSAGE,
                        |list| {
                            list.into_iter()
                                .map(|article| view! { <NewsCard article=article/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        },
                    )
                }}
            </div>
        </div>
    }
}

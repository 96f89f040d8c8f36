//! Innovation news article card.

#[cfg(test)]
#[path = "news_card_test.rs"]
mod news_card_test;

use leptos::prelude::*;

use crate::net::types::Article;

/// Card heading; providers occasionally omit the title.
pub fn display_title(article: &Article) -> String {
    article
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Untitled")
        .to_owned()
}

#[component]
pub fn NewsCard(article: Article) -> impl IntoView {
    let title = display_title(&article);
    let image = article.url_to_image.filter(|src| !src.trim().is_empty()).map(|src| {
        let alt = title.clone();
        view! { <img class="news-card__image" src=src alt=alt/> }
    });

    view! {
        <div class="news-card">
            {image}
            <div class="news-card__content">
                <h2 class="news-card__title">{title}</h2>
                <p class="news-card__description">{article.description.unwrap_or_default()}</p>
                <a class="news-card__link" href=article.url target="_blank" rel="noopener noreferrer">
                    "Read More"
                </a>
            </div>
        </div>
    }
}

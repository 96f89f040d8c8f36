use super::*;

fn article(title: Option<&str>) -> Article {
    Article {
        title: title.map(str::to_owned),
        description: None,
        url: "https://news.example/a".to_owned(),
        url_to_image: None,
    }
}

#[test]
fn display_title_uses_article_title() {
    assert_eq!(display_title(&article(Some(" Fusion breakthrough "))), "Fusion breakthrough");
}

#[test]
fn display_title_falls_back_when_missing_or_blank() {
    assert_eq!(display_title(&article(None)), "Untitled");
    assert_eq!(display_title(&article(Some("  "))), "Untitled");
}

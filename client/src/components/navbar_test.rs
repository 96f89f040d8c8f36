use super::*;

fn hrefs(logged_in: bool) -> Vec<&'static str> {
    nav_links(logged_in).into_iter().map(|(href, _)| href).collect()
}

#[test]
fn guest_sees_login_and_register_but_not_progress() {
    let links = hrefs(false);
    assert!(links.contains(&"/login"));
    assert!(links.contains(&"/register"));
    assert!(!links.contains(&"/progress-tracking"));
}

#[test]
fn logged_in_user_sees_progress_but_not_login() {
    let links = hrefs(true);
    assert!(links.contains(&"/progress-tracking"));
    assert!(!links.contains(&"/login"));
    assert!(!links.contains(&"/register"));
}

#[test]
fn public_pages_always_listed_first() {
    for logged_in in [false, true] {
        assert_eq!(&hrefs(logged_in)[..3], &["/", "/fact-check", "/innovation-news"]);
    }
}

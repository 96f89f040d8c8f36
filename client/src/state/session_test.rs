use super::*;

#[test]
fn default_session_is_logged_out() {
    let session = Session::default();
    assert!(!session.is_logged_in());
    assert!(session.token().is_none());
    assert!(session.bearer().is_none());
}

#[test]
fn token_makes_session_logged_in() {
    let session = Session::from_token(Some("jwt.abc".to_owned()));
    assert!(session.is_logged_in());
    assert_eq!(session.token(), Some("jwt.abc"));
}

#[test]
fn bearer_formats_authorization_header() {
    let session = Session::from_token(Some("jwt.abc".to_owned()));
    assert_eq!(session.bearer().as_deref(), Some("Bearer jwt.abc"));
}

#[test]
fn blank_token_counts_as_logged_out() {
    assert!(!Session::from_token(Some("   ".to_owned())).is_logged_in());
    assert!(!Session::from_token(Some(String::new())).is_logged_in());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_is_logged_out_without_browser_storage() {
    assert_eq!(Session::restore(), Session::default());
}

#[test]
fn log_in_then_log_out_updates_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(Session::default());
        log_in(session, "jwt.abc".to_owned());
        assert!(session.get_untracked().is_logged_in());

        log_out(session);
        assert!(!session.get_untracked().is_logged_in());
    });
}

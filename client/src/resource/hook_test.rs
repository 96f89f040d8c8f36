#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::resource::{ResourceError, ResourceStatus, UNAUTHORIZED_MESSAGE};
use crate::resources::{CLAIMS, PROGRESS};
use crate::util::validate::EMPTY_CLAIM_MESSAGE;

#[test]
fn new_handle_starts_idle() {
    Owner::new().with(|| {
        let handle = RemoteResourceHandle::new(&CLAIMS, RwSignal::new(Session::default()));
        assert_eq!(handle.state().status(), ResourceStatus::Idle);
    });
}

#[test]
fn blank_input_fails_fast_with_validation_error() {
    Owner::new().with(|| {
        let handle = RemoteResourceHandle::new(&CLAIMS, RwSignal::new(Session::default()));
        handle.trigger("  ".to_owned());
        let state = handle.state();
        assert_eq!(state.error().map(ResourceError::message), Some(EMPTY_CLAIM_MESSAGE));
    });
}

#[test]
fn protected_trigger_without_session_is_unauthorized() {
    Owner::new().with(|| {
        let handle = RemoteResourceHandle::new(&PROGRESS, RwSignal::new(Session::default()));
        handle.trigger(());
        assert_eq!(handle.state(), RemoteResource::Error(ResourceError::Unauthorized(UNAUTHORIZED_MESSAGE.to_owned())));
    });
}

#[test]
fn valid_trigger_enters_loading() {
    Owner::new().with(|| {
        let handle = RemoteResourceHandle::new(&CLAIMS, RwSignal::new(Session::default()));
        handle.trigger("vaccines cause autism".to_owned());
        assert!(handle.state().is_loading());
    });
}

#[test]
fn logging_in_unblocks_protected_resource() {
    Owner::new().with(|| {
        let session = RwSignal::new(Session::default());
        let handle = RemoteResourceHandle::new(&PROGRESS, session);
        handle.trigger(());
        assert_eq!(handle.state().status(), ResourceStatus::Error);

        session.set(Session::from_token(Some("jwt.abc".to_owned())));
        handle.trigger(());
        assert!(handle.state().is_loading());
    });
}

#[test]
fn reset_returns_to_idle() {
    Owner::new().with(|| {
        let handle = RemoteResourceHandle::new(&CLAIMS, RwSignal::new(Session::default()));
        handle.trigger("x".to_owned());
        handle.reset();
        assert_eq!(handle.state(), RemoteResource::Idle);
    });
}

#[test]
fn settled_callback_can_reset_the_same_handle() {
    Owner::new().with(|| {
        let handle = RemoteResourceHandle::new(&CLAIMS, RwSignal::new(Session::default()));
        let ticket = handle.cycle.try_update(ResourceCycle::begin).unwrap();
        let seen = std::cell::Cell::new(None);
        let settled = handle.settle(ticket, Ok(Vec::new()), |state| {
            seen.set(Some(state.status()));
            handle.reset();
        });
        assert!(settled);
        assert_eq!(seen.get(), Some(ResourceStatus::Success));
        assert_eq!(handle.state(), RemoteResource::Idle);
    });
}

#[test]
fn superseded_ticket_skips_callback() {
    Owner::new().with(|| {
        let handle = RemoteResourceHandle::new(&CLAIMS, RwSignal::new(Session::default()));
        let stale = handle.cycle.try_update(ResourceCycle::begin).unwrap();
        handle.trigger("newer claim".to_owned());
        let settled = handle.settle(stale, Ok(Vec::new()), |_| panic!("stale response reached the view"));
        assert!(!settled);
        assert!(handle.state().is_loading());
    });
}

use super::*;
use crate::net::types::{GoalBoard, Insights};

#[test]
fn default_resource_is_idle_with_no_data_or_error() {
    let state = RemoteResource::<Vec<u8>>::default();
    assert_eq!(state.status(), ResourceStatus::Idle);
    assert!(state.data().is_none());
    assert!(state.error().is_none());
}

#[test]
fn loading_has_neither_data_nor_error() {
    let state = RemoteResource::<Vec<u8>>::Loading;
    assert!(state.is_loading());
    assert!(state.data().is_none());
    assert!(state.error().is_none());
}

#[test]
fn success_exposes_data_only() {
    let state: RemoteResource<Vec<u8>> = Ok(vec![1, 2]).into();
    assert_eq!(state.status(), ResourceStatus::Success);
    assert_eq!(state.data(), Some(&vec![1, 2]));
    assert!(state.error().is_none());
}

#[test]
fn error_exposes_error_only() {
    let state: RemoteResource<Vec<u8>> = Err(ResourceError::Transport("boom".to_owned())).into();
    assert_eq!(state.status(), ResourceStatus::Error);
    assert!(state.data().is_none());
    assert_eq!(state.error().map(ResourceError::message), Some("boom"));
}

#[test]
fn error_display_is_its_message() {
    let err = ResourceError::Unauthorized(UNAUTHORIZED_MESSAGE.to_owned());
    assert_eq!(err.to_string(), UNAUTHORIZED_MESSAGE);
    assert_eq!(err.kind(), "unauthorized");
}

#[test]
fn error_kinds_are_distinct() {
    let kinds = [
        ResourceError::Validation(String::new()).kind(),
        ResourceError::Transport(String::new()).kind(),
        ResourceError::Schema(String::new()).kind(),
        ResourceError::Unauthorized(String::new()).kind(),
    ];
    for (i, a) in kinds.iter().enumerate() {
        for (j, b) in kinds.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// Presentation
// =============================================================

#[test]
fn empty_success_displays_as_empty_not_failed() {
    let state = RemoteResource::<Vec<u8>>::Success(Vec::new());
    assert_eq!(state.into_presentation(), Presentation::Empty);
}

#[test]
fn populated_success_displays_as_ready() {
    let state = RemoteResource::Success(vec![7u8]);
    assert_eq!(state.into_presentation(), Presentation::Ready(vec![7u8]));
}

#[test]
fn error_displays_as_failed() {
    let err = ResourceError::Schema("bad".to_owned());
    let state = RemoteResource::<Vec<u8>>::Error(err.clone());
    assert_eq!(state.into_presentation(), Presentation::Failed(err));
}

#[test]
fn goal_board_with_only_recommendations_is_not_empty() {
    let board = GoalBoard { goals: Vec::new(), recommended: vec!["Read more".to_owned()] };
    assert!(!board.is_empty_result());
    assert!(GoalBoard::default().is_empty_result());
}

#[test]
fn insights_without_any_field_is_empty() {
    assert!(Insights::default().is_empty_result());
    let insights = Insights { suggestions: vec!["Try pairing".to_owned()], ..Insights::default() };
    assert!(!insights.is_empty_result());
}

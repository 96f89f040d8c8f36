use super::*;
use crate::resource::ResourceStatus;

#[test]
fn new_cycle_is_idle_at_generation_zero() {
    let cycle = ResourceCycle::<Vec<u8>>::new();
    assert_eq!(cycle.state().status(), ResourceStatus::Idle);
    assert_eq!(cycle.generation(), 0);
}

#[test]
fn begin_moves_to_loading_before_any_outcome() {
    let mut cycle = ResourceCycle::<Vec<u8>>::new();
    let mut observed = vec![cycle.state().status()];

    let ticket = cycle.begin();
    observed.push(cycle.state().status());

    assert!(cycle.settle(ticket, Ok(vec![1])));
    observed.push(cycle.state().status());

    assert_eq!(observed, vec![ResourceStatus::Idle, ResourceStatus::Loading, ResourceStatus::Success]);
}

#[test]
fn error_outcome_also_passes_through_loading() {
    let mut cycle = ResourceCycle::<Vec<u8>>::new();
    let ticket = cycle.begin();
    assert!(cycle.state().is_loading());
    assert!(cycle.settle(ticket, Err(ResourceError::Transport("down".to_owned()))));
    assert_eq!(cycle.state().status(), ResourceStatus::Error);
}

#[test]
fn second_trigger_wins_when_first_response_arrives_last() {
    let mut cycle = ResourceCycle::new();
    let first = cycle.begin();
    let second = cycle.begin();

    assert!(cycle.settle(second, Ok("second")));
    assert!(!cycle.settle(first, Ok("first")));

    assert_eq!(cycle.state(), &RemoteResource::Success("second"));
}

#[test]
fn second_trigger_wins_when_first_response_arrives_first() {
    let mut cycle = ResourceCycle::new();
    let first = cycle.begin();
    let second = cycle.begin();

    assert!(!cycle.settle(first, Ok("first")));
    assert!(cycle.state().is_loading());
    assert!(cycle.settle(second, Ok("second")));

    assert_eq!(cycle.state(), &RemoteResource::Success("second"));
}

#[test]
fn stale_error_cannot_overwrite_newer_success() {
    let mut cycle = ResourceCycle::new();
    let first = cycle.begin();
    let second = cycle.begin();
    assert!(cycle.settle(second, Ok(1)));
    assert!(!cycle.settle(first, Err(ResourceError::Transport("late".to_owned()))));
    assert_eq!(cycle.state(), &RemoteResource::Success(1));
}

#[test]
fn fail_fast_supersedes_in_flight_request() {
    let mut cycle = ResourceCycle::<u8>::new();
    let ticket = cycle.begin();
    cycle.fail_fast(ResourceError::Validation("empty".to_owned()));

    assert!(!cycle.settle(ticket, Ok(9)));
    assert_eq!(cycle.state(), &RemoteResource::Error(ResourceError::Validation("empty".to_owned())));
}

#[test]
fn retrigger_after_success_runs_full_cycle_again() {
    let mut cycle = ResourceCycle::new();
    let first = cycle.begin();
    assert!(cycle.settle(first, Ok(1)));

    let again = cycle.begin();
    assert!(cycle.state().is_loading());
    assert_ne!(first.generation(), again.generation());
    assert!(cycle.settle(again, Ok(2)));
    assert_eq!(cycle.state(), &RemoteResource::Success(2));
}

#[test]
fn reset_returns_to_idle_and_drops_in_flight() {
    let mut cycle = ResourceCycle::<u8>::new();
    let ticket = cycle.begin();
    cycle.reset();
    assert!(!cycle.settle(ticket, Ok(1)));
    assert_eq!(cycle.state().status(), ResourceStatus::Idle);
}

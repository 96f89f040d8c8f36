//! Leptos glue for driving a resource cycle from a view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `use_remote_resource` gives a view a `Copy` handle over an
//! `RwSignal<ResourceCycle<T>>`. `trigger` runs the pure `prepare` step,
//! moves the signal to `Loading`, and spawns the HTTP exchange. The response
//! is interpreted and settled against the ticket taken at trigger time, so
//! only the newest trigger ever reaches the view.
//!
//! Requests are only spawned in the browser. During SSR a triggered resource
//! stays in `Loading` until the client hydrates and triggers again.

#[cfg(test)]
#[path = "hook_test.rs"]
mod hook_test;

use leptos::prelude::*;

use super::{RemoteResource, ResourceCycle, ResourceDescriptor, ResourceError, Ticket, prepare};
use crate::state::session::{Session, use_session};

/// Reactive handle to one remote resource owned by the calling view.
pub struct RemoteResourceHandle<I: 'static, T: Send + Sync + 'static> {
    descriptor: &'static ResourceDescriptor<I, T>,
    cycle: RwSignal<ResourceCycle<T>>,
    session: RwSignal<Session>,
}

impl<I: 'static, T: Send + Sync + 'static> Clone for RemoteResourceHandle<I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: 'static, T: Send + Sync + 'static> Copy for RemoteResourceHandle<I, T> {}

/// Create a resource handle bound to the session in context.
pub fn use_remote_resource<I: 'static, T: Clone + Send + Sync + 'static>(
    descriptor: &'static ResourceDescriptor<I, T>,
) -> RemoteResourceHandle<I, T> {
    RemoteResourceHandle::new(descriptor, use_session())
}

impl<I: 'static, T: Clone + Send + Sync + 'static> RemoteResourceHandle<I, T> {
    pub fn new(descriptor: &'static ResourceDescriptor<I, T>, session: RwSignal<Session>) -> Self {
        Self { descriptor, cycle: RwSignal::new(ResourceCycle::new()), session }
    }

    /// Current state, tracked.
    pub fn state(&self) -> RemoteResource<T> {
        self.cycle.with(|c| c.state().clone())
    }

    /// Start a new cycle for `input`, superseding any request in flight.
    pub fn trigger(&self, input: I) {
        self.trigger_with(input, |_| {});
    }

    /// Like `trigger`, then run `after` once this cycle's response settles.
    /// `after` is skipped when the cycle fails a precondition or is
    /// superseded before its response arrives.
    pub fn trigger_with(&self, input: I, after: impl FnOnce(&RemoteResource<T>) + 'static) {
        let descriptor = self.descriptor;
        let session = self.session.get_untracked();
        let request = match prepare(descriptor, &session, &input) {
            Ok(request) => request,
            Err(err) => {
                leptos::logging::warn!("{}: {} ({})", descriptor.name, err, err.kind());
                self.cycle.update(|c| c.fail_fast(err));
                return;
            }
        };
        let Some(ticket) = self.cycle.try_update(ResourceCycle::begin) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use super::{NETWORK_FAILURE_MESSAGE, TIMEOUT_MESSAGE, interpret};
            use crate::net::api::{self, SendError};

            let handle = *self;
            leptos::task::spawn_local(async move {
                let outcome = match api::send(&request).await {
                    Ok(response) => interpret(descriptor, response.status, &response.body),
                    Err(err) => {
                        leptos::logging::warn!("{} {} failed: {err}", request.method.as_str(), request.url);
                        Err(ResourceError::Transport(
                            match err {
                                SendError::Network(_) => NETWORK_FAILURE_MESSAGE,
                                SendError::Timeout(_) => TIMEOUT_MESSAGE,
                            }
                            .to_owned(),
                        ))
                    }
                };
                if let Err(err) = &outcome {
                    leptos::logging::warn!("{}: {} ({})", descriptor.name, err, err.kind());
                }
                handle.settle(ticket, outcome, after);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, ticket, after);
        }
    }

    /// Apply a finished response and hand the settled state to `after`.
    /// The state is cloned out before `after` runs, so `after` may trigger
    /// or reset this same handle.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn settle(&self, ticket: Ticket, outcome: Result<T, ResourceError>, after: impl FnOnce(&RemoteResource<T>)) -> bool {
        match self.cycle.try_update(|c| c.settle(ticket, outcome)) {
            Some(true) => {
                let state = self.cycle.with_untracked(|c| c.state().clone());
                after(&state);
                true
            }
            Some(false) => {
                leptos::logging::log!("{}: dropped stale response #{}", self.descriptor.name, ticket.generation());
                false
            }
            None => false,
        }
    }

    /// Return to `Idle`, discarding any in-flight response.
    pub fn reset(&self) {
        self.cycle.update(ResourceCycle::reset);
    }
}

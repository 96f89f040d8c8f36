//! Supersession bookkeeping for a single resource.
//!
//! Each `begin` hands out a ticket carrying a fresh generation number. A
//! response may only settle the state if its ticket is still the newest one,
//! so a slow response from an older trigger can never overwrite the result
//! of a newer trigger, regardless of arrival order.

#[cfg(test)]
#[path = "cycle_test.rs"]
mod cycle_test;

use super::{RemoteResource, ResourceError};

/// Proof of a started request cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// A resource's state plus the generation of its newest trigger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceCycle<T> {
    state: RemoteResource<T>,
    generation: u64,
}

impl<T> ResourceCycle<T> {
    pub fn new() -> Self {
        Self { state: RemoteResource::Idle, generation: 0 }
    }

    pub fn state(&self) -> &RemoteResource<T> {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new cycle: the state becomes `Loading` and any in-flight
    /// ticket is superseded.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = RemoteResource::Loading;
        Ticket { generation: self.generation }
    }

    /// Apply a finished request. Returns `false` (and changes nothing) when
    /// the ticket was superseded by a later `begin` or `fail_fast`.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<T, ResourceError>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.state = outcome.into();
        true
    }

    /// Precondition failure: jump straight to `Error` without a request.
    /// Also supersedes whatever was in flight.
    pub fn fail_fast(&mut self, err: ResourceError) {
        self.generation += 1;
        self.state = RemoteResource::Error(err);
    }

    /// Back to `Idle`, dropping any in-flight response.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = RemoteResource::Idle;
    }
}

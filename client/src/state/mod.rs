//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session outlives a single view; resource state is owned by the
//! views themselves (see `resource`).

pub mod session;

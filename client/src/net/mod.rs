//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles transport (URL building, bearer headers, timeouts) and
//! `types` defines the wire schema of every endpoint.

pub mod api;
pub mod types;

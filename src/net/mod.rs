//! Network layer for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Request construction and response classification are plain Rust so they
//! run under native tests; only `transport` touches the browser fetch API.

pub mod api;
pub mod transport;
pub mod types;

//! View-local state models.

pub mod session;

//! Routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app has one route; the page resolves URL inputs and hands them to the
//! view as explicit props.

pub mod session;

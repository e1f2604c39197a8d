//! Browser helpers shared by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Helpers no-op outside the `csr` build so native tests link without a DOM.

pub mod navigation;

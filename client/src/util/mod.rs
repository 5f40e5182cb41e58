//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! rendering to improve reuse and testability.

pub mod clock;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod sweep;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component is independent and mounted directly by a parent view; none
//! reads shared context or depends on another component.

pub mod dom_sweeper;
pub mod gradient_border;
pub mod message_bubble;
pub mod skip_links;

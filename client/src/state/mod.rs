//! Client-side display state.

pub mod chat;

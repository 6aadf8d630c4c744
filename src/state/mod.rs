//! Reactive application state.

pub mod draft;

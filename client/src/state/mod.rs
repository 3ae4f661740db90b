//! Reactive application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct here is wrapped in an `RwSignal` by `app::App` and shared via
//! Leptos context. The structs themselves are plain data with reducer methods
//! so they can be tested without a reactive runtime.

pub mod auth;
pub mod tasks;
pub mod ui;

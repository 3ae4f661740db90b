//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the Today screen pieces while reading/writing shared
//! state from Leptos context providers. Gesture math lives in
//! `tasks::gesture`; components only translate pointer events.

pub mod filter_bar;
pub mod pull_refresh;
pub mod summary_header;
pub mod task_row;
pub mod task_sheet;

//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` executes the request values built by `tasks::rest` against the
//! hosted backend, plus the one host call for `/api/config`.

pub mod api;

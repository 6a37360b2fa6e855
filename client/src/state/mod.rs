//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain state structs wrapped in `RwSignal` at the app root. Pages and
//! components read/write them via `expect_context`; keeping the structs
//! plain keeps them testable without a reactive runtime.

pub mod auth;
pub mod campaigns;
pub mod leads;
pub mod ui;

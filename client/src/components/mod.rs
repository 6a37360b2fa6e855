//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the role-specific chrome and shared dialogs while
//! reading/writing state from Leptos context providers.

pub mod campaign_dialog;
pub mod layout;
pub mod stat_card;

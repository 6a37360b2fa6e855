//! Networking modules for the CRM backend and the host session API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (bearer-authenticated backend calls plus
//! same-origin session calls) and `types` defines the backend DTO schema.

pub mod api;
pub mod types;

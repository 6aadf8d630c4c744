//! Networking modules for the tourism API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls; `types` defines the wire schema shared
//! with the server.

pub mod api;
pub mod types;

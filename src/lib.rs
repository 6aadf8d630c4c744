//! # tourism-client
//!
//! Leptos + WASM single-page client for the Canada Tourism site.
//!
//! The client has exactly two routes: a static welcome screen and a
//! registration form that submits to the tourism API over HTTP. This crate
//! contains the root router, page components, registration-draft state, and
//! the REST helper used by the form.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

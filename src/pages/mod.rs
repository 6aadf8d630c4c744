//! Page modules for route-level screens.

pub mod register;
pub mod welcome;

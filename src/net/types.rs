//! Wire DTOs and the error type for the tourism API boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Successful registration response; the server echoes the username and may
/// include additional fields, which are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
}

/// Error-response body. `detail` is optional so its absence is a
/// representable case rather than a fault.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Failure classes for one registration call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with an error status; `detail` carries its
    /// message, or a status-derived fallback when the body has none.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    /// A success response whose body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

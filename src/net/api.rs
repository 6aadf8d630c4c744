//! REST helper for the registration endpoint.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native build: a stub returning an error, since the endpoint is only
//! reachable from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;
use super::types::{ApiError, RegisterRequest, RegisteredUser};

/// Path of the registration endpoint, relative to the serving origin.
pub const REGISTER_ENDPOINT: &str = "/auth/register";

#[cfg(any(test, feature = "csr"))]
fn registration_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

/// Interpret an error-status response body: a present `detail` is surfaced
/// verbatim, a missing or malformed body falls back to a status-derived
/// message.
#[cfg(any(test, feature = "csr"))]
fn rejection(status: u16, body: Option<ErrorBody>) -> ApiError {
    let detail = body
        .and_then(|body| body.detail)
        .unwrap_or_else(|| registration_failed_message(status));
    ApiError::Rejected { status, detail }
}

/// Register a new account via `POST /auth/register`.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the request never reaches the server,
/// [`ApiError::Rejected`] for an error status, and [`ApiError::Decode`] when
/// a success body cannot be decoded.
pub async fn register(request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.json::<ErrorBody>().await.ok();
            return Err(rejection(resp.status(), body));
        }
        resp.json::<RegisteredUser>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Network("not available off-browser".to_owned()))
    }
}

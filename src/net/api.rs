//! REST calls against the auth backend.
//!
//! Each call is described by an [`ApiRequest`] and executed by an
//! [`HttpTransport`]. The browser build uses the `gloo-net` transport in
//! `net::transport`; tests substitute a recording fake.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. The session view collapses
//! every [`ApiError`] into "no profile", so failures degrade silently.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{MeResponse, UserProfile};
use crate::config::BackendConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network failure: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The body did not carry the expected fields.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A single outgoing backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Send the browser's stored cookies with the request.
    pub with_credentials: bool,
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes [`ApiRequest`]s. Implementations never retry or time out.
pub trait HttpTransport {
    /// Send `request` and return its status and body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] when no response was received.
    fn send(&self, request: &ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

impl<T: HttpTransport> HttpTransport for &T {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }
}

pub fn me_request(config: &BackendConfig) -> ApiRequest {
    ApiRequest { method: HttpMethod::Get, url: config.me_url(), with_credentials: true }
}

pub fn logout_request(config: &BackendConfig) -> ApiRequest {
    ApiRequest { method: config.logout_method, url: config.logout_url(), with_credentials: true }
}

/// Decode a `/auth/me` response into the user's profile.
///
/// # Errors
///
/// [`ApiError::Status`] for a non-2xx status, [`ApiError::Malformed`] when
/// the body is not the expected JSON envelope.
pub fn parse_me_response(response: &ApiResponse) -> Result<UserProfile, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    let me: MeResponse = serde_json::from_str(&response.body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok(me.raw_data)
}

/// Fetch the user bound to the current session cookie via `GET /auth/me`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// without the profile envelope.
pub async fn fetch_current_user<T: HttpTransport>(transport: &T, config: &BackendConfig) -> Result<UserProfile, ApiError> {
    let response = transport.send(&me_request(config)).await?;
    parse_me_response(&response)
}

/// Ask the backend to drop the current session.
///
/// The response body is not consumed and any status counts as done; the
/// backend answers with a redirect.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the request could not complete.
pub async fn logout<T: HttpTransport>(transport: &T, config: &BackendConfig) -> Result<(), ApiError> {
    let response = transport.send(&logout_request(config)).await?;
    log::debug!("logout answered with status {}", response.status);
    Ok(())
}

// =============================================================================
// TEST HELPERS
// =============================================================================

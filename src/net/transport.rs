//! Browser `fetch` transport backed by `gloo-net`.
//!
//! Client-side (csr): real HTTP calls with the browser's cookie jar.
//! Native builds (tests, tooling): every request fails with a network error,
//! since there is no browser session to send.

#![allow(clippy::unused_async)]

use super::api::{ApiError, ApiRequest, ApiResponse, HttpTransport};
#[cfg(feature = "csr")]
use super::api::HttpMethod;

/// [`HttpTransport`] over the browser fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl HttpTransport for BrowserTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
            };
            let credentials = if request.with_credentials {
                RequestCredentials::Include
            } else {
                RequestCredentials::SameOrigin
            };
            let resp = builder
                .credentials(credentials)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Network(format!("no browser transport for {}", request.url)))
        }
    }
}

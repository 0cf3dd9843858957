// ABOUTME: Outbound HTTP capability seam with a shared connection-pooled client
// ABOUTME: Lets integrators swap the transport and tests stub the provider endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

use crate::errors::TransportError;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Global shared HTTP client with default timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get the shared HTTP client for provider calls.
///
/// The client uses connection pooling; prefer this over creating
/// per-request clients.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Status and body of an outbound call, as far as the flow cares.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body text
    pub body: String,
}

impl HttpResponse {
    /// True for 2xx statuses
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Outbound HTTP capability used by the login flow.
///
/// Timeout, retry and pooling policy live behind this seam; the flow
/// itself never retries and treats any transport failure as a terminal
/// rejection of the current callback.
#[async_trait]
pub trait AuthHttpTransport: Send + Sync {
    /// POST a form-encoded body with HTTP Basic credentials
    async fn post_form(
        &self,
        url: &str,
        username: &str,
        password: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError>;

    /// GET a URL, optionally with a bearer token
    async fn get(&self, url: &str, bearer: Option<&str>) -> Result<HttpResponse, TransportError>;
}

/// Transport backed by the shared `reqwest` client.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

#[async_trait]
impl AuthHttpTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        username: &str,
        password: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        let response = shared_client()
            .post(url)
            .basic_auth(username, Some(password))
            .form(form)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }

    async fn get(&self, url: &str, bearer: Option<&str>) -> Result<HttpResponse, TransportError> {
        let mut request = shared_client().get(url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

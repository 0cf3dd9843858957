// ABOUTME: Inbound request collaborator supplied by the host framework
// ABOUTME: Carries the request path, decoded query parameters and the client IP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

use std::collections::HashMap;
use std::net::IpAddr;

/// The slice of an inbound HTTP request the login flow reads.
///
/// The strategy never looks at the request body or headers; the host hands
/// over the path, the already percent-decoded query parameters and the
/// client's network address.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    path: String,
    query: HashMap<String, String>,
    client_ip: IpAddr,
}

impl InboundRequest {
    /// Create a request with no query parameters
    pub fn new(path: impl Into<String>, client_ip: IpAddr) -> Self {
        Self {
            path: path.into(),
            query: HashMap::new(),
            client_ip,
        }
    }

    /// Attach a query parameter
    #[must_use]
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Request path
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Client network address as reported by the host
    #[must_use]
    pub const fn client_ip(&self) -> IpAddr {
        self.client_ip
    }

    /// Look up a query parameter
    #[must_use]
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// The `code` query parameter
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.query("code")
    }

    /// The `state` query parameter
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.query("state")
    }

    /// The provider-reported `error` query parameter
    #[must_use]
    pub fn provider_error(&self) -> Option<&str> {
        self.query("error")
    }

    /// The provider-reported `error_description` query parameter
    #[must_use]
    pub fn provider_error_description(&self) -> Option<&str> {
        self.query("error_description")
    }
}

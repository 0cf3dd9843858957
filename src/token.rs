// ABOUTME: Token endpoint wire model
// ABOUTME: Deserializes the AuthSCH authorization-code exchange response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

use serde::Deserialize;

/// Response of the token endpoint.
///
/// Ephemeral: held only for the duration of one callback, never stored.
/// Refresh tokens are surfaced but the strategy never uses them (token
/// refresh is out of scope).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer access token for the profile endpoint
    pub access_token: String,
    /// Token type, `Bearer` for AuthSCH
    pub token_type: String,
    /// Token lifetime in seconds
    #[serde(default)]
    pub expires_in: u64,
    /// Granted scopes
    #[serde(default)]
    pub scope: Vec<String>,
    /// Refresh token, unused by this flow
    #[serde(default)]
    pub refresh_token: Option<String>,
}

// ABOUTME: Signed login-state codec providing stateless CSRF defense
// ABOUTME: Issues and verifies HMAC-SHA256 signed tokens binding a login attempt to a client IP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

//! Signed state tokens
//!
//! A login attempt mints a token carrying a random nonce, the issue
//! timestamp and the requesting client's IP, signed with the configured
//! state secret. The callback verifies the signature, the 10 minute
//! validity window and the IP binding. No server-side storage is involved:
//! the signature plus the embedded timestamp is the only state, so replay
//! is possible only from the same client IP inside the window.

use crate::constants::state::{NONCE_BYTES, STATE_TTL_MINUTES};
use crate::errors::StateTokenError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{Duration, Utc};
use rand::Rng;
use ring::hmac;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Per-login-attempt state carried inside the signed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginState {
    /// Random nonce, hex encoded
    pub nonce: String,
    /// Issue time in epoch milliseconds
    pub issued_at: i64,
    /// Client address the login attempt originated from
    pub ip: IpAddr,
}

/// Issues and verifies signed login-state tokens.
pub struct StateTokenCodec {
    key: hmac::Key,
    ttl: Duration,
}

impl StateTokenCodec {
    /// Create a codec with the default 10 minute validity window
    #[must_use]
    pub fn new(state_secret: &str) -> Self {
        Self::with_ttl(state_secret, Duration::minutes(STATE_TTL_MINUTES))
    }

    /// Create a codec with a custom validity window
    #[must_use]
    pub fn with_ttl(state_secret: &str, ttl: Duration) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, state_secret.as_bytes()),
            ttl,
        }
    }

    /// Mint a token for a login attempt from `ip`.
    ///
    /// The output is `base64url(payload).hex(signature)`: opaque and safe
    /// to place in a URL query parameter.
    #[must_use]
    pub fn issue(&self, ip: IpAddr) -> String {
        let nonce_bytes: [u8; NONCE_BYTES] = rand::thread_rng().gen();
        let state = LoginState {
            nonce: hex::encode(nonce_bytes),
            issued_at: Utc::now().timestamp_millis(),
            ip,
        };
        // LoginState serialization cannot fail: all fields are plain data.
        let payload = serde_json::to_vec(&state).unwrap_or_default();
        let encoded = URL_SAFE_NO_PAD.encode(payload);
        let signature = hex::encode(hmac::sign(&self.key, encoded.as_bytes()).as_ref());
        format!("{encoded}.{signature}")
    }

    /// Verify a token against the client address of the current request.
    ///
    /// The payload is only decoded after the signature checks out.
    ///
    /// # Errors
    ///
    /// [`StateTokenError::Malformed`] when the token does not parse,
    /// [`StateTokenError::InvalidSignature`] on signature mismatch,
    /// [`StateTokenError::Expired`] past the validity window and
    /// [`StateTokenError::IpMismatch`] when the embedded address differs
    /// from `expected_ip`.
    pub fn verify(&self, token: &str, expected_ip: IpAddr) -> Result<LoginState, StateTokenError> {
        let (encoded, signature) = token
            .rsplit_once('.')
            .ok_or(StateTokenError::Malformed)?;

        let expected = hex::encode(hmac::sign(&self.key, encoded.as_bytes()).as_ref());
        // Constant-time comparison to prevent timing attacks
        if !bool::from(subtle::ConstantTimeEq::ct_eq(
            signature.as_bytes(),
            expected.as_bytes(),
        )) {
            return Err(StateTokenError::InvalidSignature);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| StateTokenError::Malformed)?;
        let state: LoginState =
            serde_json::from_slice(&payload).map_err(|_| StateTokenError::Malformed)?;

        let age_ms = Utc::now().timestamp_millis() - state.issued_at;
        if age_ms > self.ttl.num_milliseconds() {
            return Err(StateTokenError::Expired);
        }
        if state.ip != expected_ip {
            return Err(StateTokenError::IpMismatch);
        }

        Ok(state)
    }
}

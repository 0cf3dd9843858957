// ABOUTME: Typed error taxonomy for the AuthSCH login flow
// ABOUTME: Separates fatal configuration errors, state-token failures and transport failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

use thiserror::Error;

/// Fatal strategy misconfiguration.
///
/// Surfaced as a distinct [`AuthOutcome::Error`](crate::AuthOutcome::Error)
/// outcome rather than a per-request authentication failure: the integrator
/// misconfigured the system and no retry can succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `client_id` is missing or empty
    #[error("no client id provided")]
    MissingClientId,

    /// `client_secret` is missing or empty
    #[error("no client secret provided")]
    MissingClientSecret,
}

/// Failure verifying a signed login-state token.
///
/// Every variant maps to a `403 Forbidden` rejection, kept distinct from
/// ordinary authentication failures so security rejections can be monitored
/// separately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateTokenError {
    /// Token does not have the expected `payload.signature` shape
    #[error("state token is malformed")]
    Malformed,

    /// HMAC signature does not verify under the configured state secret
    #[error("state token signature mismatch")]
    InvalidSignature,

    /// Token was issued longer ago than the validity window
    #[error("state token expired")]
    Expired,

    /// Token was minted for a different client address
    #[error("state token bound to a different client address")]
    IpMismatch,
}

/// Outbound HTTP failure from the transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request-level failure (connect, timeout, TLS, body read)
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failure reported by a custom transport implementation
    #[error("transport failure: {0}")]
    Other(String),
}

// ABOUTME: Authentication outcome union consumed by host frameworks
// ABOUTME: Maps the flow result onto redirect, success, rejection, pass-through or fatal error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

use crate::errors::ConfigError;

/// HTTP status the host should surface for a terminal rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionStatus {
    /// Protocol rejection: the flow must restart from login (401)
    Unauthorized,
    /// Security rejection: state verification failed (403)
    Forbidden,
}

impl RejectionStatus {
    /// Numeric HTTP status code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
        }
    }
}

/// Result of dispatching one inbound request through the login flow.
///
/// Host frameworks adapt this union to their own middleware conventions:
/// issue the redirect, install the identity, respond with the rejection
/// status, fall through to downstream handlers, or abort on the fatal
/// configuration error.
#[derive(Debug)]
pub enum AuthOutcome<I> {
    /// Redirect the user agent to the provider's authorization page
    Redirect(String),

    /// Authentication succeeded and the validation hook produced an identity
    Success(I),

    /// Terminal rejection for this callback invocation
    Fail(RejectionStatus),

    /// The request is not part of the login flow; downstream handling continues
    Pass,

    /// Fatal misconfiguration, not retryable
    Error(ConfigError),
}

impl<I> AuthOutcome<I> {
    /// The rejection status, if this outcome is a rejection
    #[must_use]
    pub const fn rejection(&self) -> Option<RejectionStatus> {
        match self {
            Self::Fail(status) => Some(*status),
            _ => None,
        }
    }

    /// True when the request was not handled by the flow
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

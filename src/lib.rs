// ABOUTME: Main library entry point for the AuthSCH OAuth2 login strategy
// ABOUTME: Wires the flow controller, state codec, profile normalizers and transport seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

#![deny(unsafe_code)]

//! # authsch
//!
//! OAuth2 Authorization-Code-flow client adapter for the AuthSCH identity
//! provider (`https://auth.sch.bme.hu`). The crate drives the three-step
//! login protocol against the provider and normalizes its profile payload
//! into a stable internal shape; HTTP routing stays with the host
//! framework, which feeds in an [`InboundRequest`] and consumes an
//! [`AuthOutcome`].
//!
//! ## Features
//!
//! - **Login redirect construction**: authorization URL with the scopes
//!   your client was registered for, `openid` included automatically
//! - **Stateless CSRF defense**: an HMAC-signed state token binds each
//!   login attempt to the requesting client's IP for 10 minutes, with no
//!   server-side session storage
//! - **Code exchange and profile fetch**: Basic-authenticated token
//!   exchange followed by a bearer-authenticated userinfo request
//! - **Profile normalization**: both the legacy profile API and the
//!   current OIDC userinfo schema map onto one [`AuthSchProfile`] shape
//! - **Injected acceptance hook**: a [`ProfileValidator`] decides whether
//!   the authenticated user becomes an application identity
//!
//! ## Example
//!
//! ```rust,no_run
//! use authsch::{
//!     AuthOutcome, AuthSchProfile, AuthSchScope, AuthSchStrategy, InboundRequest,
//!     ProfileValidator, StrategyConfig,
//! };
//! use async_trait::async_trait;
//!
//! struct AcceptEveryone;
//!
//! #[async_trait]
//! impl ProfileValidator for AcceptEveryone {
//!     type Identity = String;
//!
//!     async fn validate(&self, profile: AuthSchProfile) -> Option<String> {
//!         Some(profile.auth_sch_id)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = StrategyConfig::new("client-id", "client-secret")
//!         .with_scopes([AuthSchScope::Basic, AuthSchScope::Email])
//!         .with_state_secret("state-signing-secret");
//!     let strategy = AuthSchStrategy::new(config, AcceptEveryone);
//!
//!     let request = InboundRequest::new("/auth/login", "203.0.113.7".parse().unwrap());
//!     if let AuthOutcome::Redirect(url) = strategy.authenticate(&request).await {
//!         println!("redirect the user agent to {url}");
//!     }
//! }
//! ```

/// Strategy configuration and provider endpoints
pub mod config;

/// Provider defaults and flow constants
pub mod constants;

/// Typed error taxonomy
pub mod errors;

/// Authentication outcome union
pub mod outcome;

/// Normalized profile model and the raw schema variants
pub mod profile;

/// Inbound request collaborator
pub mod request;

/// Provider scope identifiers
pub mod scopes;

/// Signed login-state codec
pub mod state;

/// Login flow controller
pub mod strategy;

/// Token endpoint wire model
pub mod token;

/// Outbound HTTP capability seam
pub mod transport;

pub use config::{ProfileApiVariant, ProviderEndpoints, StrategyConfig};
pub use errors::{ConfigError, StateTokenError, TransportError};
pub use outcome::{AuthOutcome, RejectionStatus};
pub use profile::{
    AuthSchProfile, BmeUnitScope, Entrant, EntrantType, GroupMembership, LinkedAccounts,
    MembershipStatus, RawLegacyProfile, RawOidcProfile,
};
pub use request::InboundRequest;
pub use scopes::AuthSchScope;
pub use state::{LoginState, StateTokenCodec};
pub use strategy::{AuthSchStrategy, ProfileValidator};
pub use token::TokenResponse;
pub use transport::{AuthHttpTransport, HttpResponse, ReqwestTransport};

// ABOUTME: Provider endpoint defaults and flow constants for the AuthSCH adapter
// ABOUTME: Centralizes URLs, path suffixes and state-token parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

//! Constants module
//!
//! Constants are grouped by domain. Provider endpoint paths follow the
//! AuthSCH deployment at `https://auth.sch.bme.hu`; the base URL can be
//! pointed at a staging instance via the `AUTHSCH_PROVIDER` environment
//! variable.

/// Provider endpoint constants
pub mod provider {
    use std::env;

    /// Default AuthSCH deployment base URL
    pub const DEFAULT_BASE_URL: &str = "https://auth.sch.bme.hu";

    /// Authorization (login page) endpoint path
    pub const AUTHORIZE_PATH: &str = "/site/login";

    /// Token endpoint path
    pub const TOKEN_PATH: &str = "/oauth2/token";

    /// OIDC userinfo endpoint path (current profile API)
    pub const USERINFO_PATH: &str = "/oidc/userinfo";

    /// Legacy profile API endpoint path
    pub const LEGACY_PROFILE_PATH: &str = "/api/profile";

    /// Get the provider base URL from the environment or the default
    #[must_use]
    pub fn base_url() -> String {
        env::var("AUTHSCH_PROVIDER").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned())
    }
}

/// Login flow constants
pub mod flow {
    /// Strategy name exposed to host frameworks
    pub const STRATEGY_NAME: &str = "authsch";

    /// Default login path suffix
    pub const DEFAULT_LOGIN_SUFFIX: &str = "login";

    /// Default callback path suffix
    pub const DEFAULT_CALLBACK_SUFFIX: &str = "callback";

    /// Scope the provider requires on every authorization request
    pub const OPENID_SCOPE: &str = "openid";
}

/// Signed state-token constants
pub mod state {
    /// State token validity window in minutes
    pub const STATE_TTL_MINUTES: i64 = 10;

    /// Random nonce length in bytes (rendered as hex)
    pub const NONCE_BYTES: usize = 16;
}

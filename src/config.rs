// ABOUTME: Strategy configuration and provider endpoint derivation
// ABOUTME: Immutable settings constructed by the integrator or loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

use crate::constants::flow::{DEFAULT_CALLBACK_SUFFIX, DEFAULT_LOGIN_SUFFIX, OPENID_SCOPE};
use crate::constants::provider::{
    base_url, AUTHORIZE_PATH, LEGACY_PROFILE_PATH, TOKEN_PATH, USERINFO_PATH,
};
use crate::errors::ConfigError;
use crate::scopes::AuthSchScope;
use std::env;

/// Which profile API the configured provider instance serves.
///
/// The two schema generations are incompatible and are never
/// auto-detected; the integrator picks the variant their client was
/// registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileApiVariant {
    /// Current OIDC userinfo endpoint, bearer authentication
    #[default]
    Oidc,
    /// Historical profile API, access token in the query string
    Legacy,
}

/// Provider endpoint URLs, fixed per deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    /// Authorization (login page) endpoint
    pub authorization_url: String,
    /// Token endpoint
    pub token_url: String,
    /// OIDC userinfo endpoint
    pub userinfo_url: String,
    /// Legacy profile API endpoint
    pub legacy_profile_url: String,
}

impl ProviderEndpoints {
    /// Derive all endpoints from a provider base URL
    #[must_use]
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            authorization_url: format!("{base}{AUTHORIZE_PATH}"),
            token_url: format!("{base}{TOKEN_PATH}"),
            userinfo_url: format!("{base}{USERINFO_PATH}"),
            legacy_profile_url: format!("{base}{LEGACY_PROFILE_PATH}"),
        }
    }

    /// Derive endpoints from `AUTHSCH_PROVIDER` or the default deployment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_base(&base_url())
    }
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Immutable configuration of the login strategy.
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    /// OAuth client identifier issued by the provider
    pub client_id: String,
    /// OAuth client secret issued by the provider
    pub client_secret: String,
    /// Secret for signing login-state tokens; enables the CSRF-hardened flow
    pub state_secret: Option<String>,
    /// Requested scopes; `openid` is appended automatically
    pub scopes: Vec<AuthSchScope>,
    /// Requests whose path ends with this suffix start a login
    pub login_path_suffix: String,
    /// Requests whose path ends with this suffix are callbacks
    pub callback_path_suffix: String,
    /// Redirect URI registered with the provider
    pub redirect_uri: Option<String>,
    /// Which profile API generation to call and decode
    pub profile_api: ProfileApiVariant,
    /// Provider endpoint URLs
    pub endpoints: ProviderEndpoints,
}

impl StrategyConfig {
    /// Create a configuration with default suffixes, the OIDC profile API
    /// and endpoints derived from the environment
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            state_secret: None,
            scopes: Vec::new(),
            login_path_suffix: DEFAULT_LOGIN_SUFFIX.to_owned(),
            callback_path_suffix: DEFAULT_CALLBACK_SUFFIX.to_owned(),
            redirect_uri: None,
            profile_api: ProfileApiVariant::default(),
            endpoints: ProviderEndpoints::from_env(),
        }
    }

    /// Load credentials and optional settings from the environment.
    ///
    /// Reads `AUTHSCH_CLIENT_ID`, `AUTHSCH_CLIENT_SECRET`,
    /// `AUTHSCH_STATE_SECRET` and `AUTHSCH_REDIRECT_URI`. Missing
    /// credentials surface later as a fatal configuration error from
    /// `authenticate`, not as a panic here.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::new(
            env::var("AUTHSCH_CLIENT_ID").unwrap_or_default(),
            env::var("AUTHSCH_CLIENT_SECRET").unwrap_or_default(),
        );
        config.state_secret = env::var("AUTHSCH_STATE_SECRET").ok();
        config.redirect_uri = env::var("AUTHSCH_REDIRECT_URI").ok();
        config
    }

    /// Requested scopes
    #[must_use]
    pub fn with_scopes(mut self, scopes: impl IntoIterator<Item = AuthSchScope>) -> Self {
        self.scopes = scopes.into_iter().collect();
        self
    }

    /// Enable the CSRF-hardened flow with a state-signing secret
    #[must_use]
    pub fn with_state_secret(mut self, state_secret: impl Into<String>) -> Self {
        self.state_secret = Some(state_secret.into());
        self
    }

    /// Redirect URI registered with the provider
    #[must_use]
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Override the login and callback path suffixes
    #[must_use]
    pub fn with_path_suffixes(
        mut self,
        login: impl Into<String>,
        callback: impl Into<String>,
    ) -> Self {
        self.login_path_suffix = login.into();
        self.callback_path_suffix = callback.into();
        self
    }

    /// Select the profile API generation
    #[must_use]
    pub fn with_profile_api(mut self, profile_api: ProfileApiVariant) -> Self {
        self.profile_api = profile_api;
        self
    }

    /// Override the provider endpoints
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Check the fatal preconditions of the flow
    ///
    /// # Errors
    ///
    /// Returns the matching [`ConfigError`] when `client_id` or
    /// `client_secret` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client_id.is_empty() {
            return Err(ConfigError::MissingClientId);
        }
        if self.client_secret.is_empty() {
            return Err(ConfigError::MissingClientSecret);
        }
        Ok(())
    }

    /// True when the CSRF-hardened flow is enabled
    #[must_use]
    pub const fn is_hardened(&self) -> bool {
        self.state_secret.is_some()
    }

    /// The `scope` parameter value: `openid` plus the configured scopes,
    /// deduplicated, space-joined
    #[must_use]
    pub fn scope_parameter(&self) -> String {
        let mut names = vec![OPENID_SCOPE];
        for scope in &self.scopes {
            let name = scope.as_str();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn endpoints_derive_from_base_url() {
        let endpoints = ProviderEndpoints::from_base("https://auth.example.test/");
        assert_eq!(
            endpoints.authorization_url,
            "https://auth.example.test/site/login"
        );
        assert_eq!(endpoints.token_url, "https://auth.example.test/oauth2/token");
        assert_eq!(
            endpoints.userinfo_url,
            "https://auth.example.test/oidc/userinfo"
        );
        assert_eq!(
            endpoints.legacy_profile_url,
            "https://auth.example.test/api/profile"
        );
    }

    #[test]
    #[serial]
    fn endpoints_honor_provider_override() {
        std::env::set_var("AUTHSCH_PROVIDER", "https://staging.auth.example.test");
        let endpoints = ProviderEndpoints::from_env();
        std::env::remove_var("AUTHSCH_PROVIDER");
        assert_eq!(
            endpoints.token_url,
            "https://staging.auth.example.test/oauth2/token"
        );
    }

    #[test]
    #[serial]
    fn endpoints_default_to_authsch() {
        std::env::remove_var("AUTHSCH_PROVIDER");
        let endpoints = ProviderEndpoints::from_env();
        assert_eq!(endpoints.userinfo_url, "https://auth.sch.bme.hu/oidc/userinfo");
    }

    #[test]
    fn validate_reports_missing_credentials() {
        let config = StrategyConfig::new("", "secret");
        assert_eq!(config.validate(), Err(ConfigError::MissingClientId));

        let config = StrategyConfig::new("client", "");
        assert_eq!(config.validate(), Err(ConfigError::MissingClientSecret));

        let config = StrategyConfig::new("client", "secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn scope_parameter_includes_openid_and_dedups() {
        let config = StrategyConfig::new("client", "secret").with_scopes([
            AuthSchScope::Basic,
            AuthSchScope::Email,
            AuthSchScope::Basic,
        ]);
        assert_eq!(config.scope_parameter(), "openid basic mail");
    }

    #[test]
    fn default_suffixes_match_the_provider_convention() {
        let config = StrategyConfig::new("client", "secret");
        assert_eq!(config.login_path_suffix, "login");
        assert_eq!(config.callback_path_suffix, "callback");
        assert_eq!(config.profile_api, ProfileApiVariant::Oidc);
        assert!(!config.is_hardened());
    }
}

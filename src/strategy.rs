// ABOUTME: OAuth flow controller driving login redirect, callback validation and token exchange
// ABOUTME: Orchestrates state verification, profile fetch, normalization and the validation hook
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kir-Dev

//! # Login flow controller
//!
//! [`AuthSchStrategy`] dispatches inbound requests by path suffix:
//! login requests produce a redirect to the provider's authorization
//! page, callback requests run the authorization-code exchange, and
//! everything else passes through untouched.
//!
//! The callback path is the critical one. It validates the provider
//! response, verifies the signed login state when the hardened flow is
//! enabled, exchanges the code for an access token, fetches and
//! normalizes the profile, and finally asks the injected
//! [`ProfileValidator`] whether the user is accepted. Transport and
//! decode failures are caught here, logged, and converted to rejections:
//! a failed exchange never crashes the request-handling process and is
//! never retried. The user restarts from login.

use crate::config::{ProfileApiVariant, StrategyConfig};
use crate::constants::flow::STRATEGY_NAME;
use crate::outcome::{AuthOutcome, RejectionStatus};
use crate::profile::{AuthSchProfile, RawLegacyProfile, RawOidcProfile};
use crate::request::InboundRequest;
use crate::state::StateTokenCodec;
use crate::token::TokenResponse;
use crate::transport::{AuthHttpTransport, ReqwestTransport};
use async_trait::async_trait;
use tracing::{error, warn};
use url::Url;

/// Application-level acceptance decision, injected at construction.
///
/// The generalized form of the strategy's abstract `validate` override:
/// given the normalized profile, return the application identity or
/// `None` to reject the login with a 401. Panics raised here are not
/// caught by the strategy; that failure domain belongs to the hook.
#[async_trait]
pub trait ProfileValidator: Send + Sync {
    /// Identity type installed by the host on success
    type Identity: Send;

    /// Decide whether the authenticated profile is accepted
    async fn validate(&self, profile: AuthSchProfile) -> Option<Self::Identity>;
}

/// OAuth2 authorization-code login strategy for AuthSCH.
///
/// Holds only read-only configuration, the transport and the validation
/// hook: safe for concurrent use by many simultaneous requests.
pub struct AuthSchStrategy<V: ProfileValidator> {
    config: StrategyConfig,
    validator: V,
    transport: Box<dyn AuthHttpTransport>,
    state_codec: Option<StateTokenCodec>,
}

impl<V: ProfileValidator> AuthSchStrategy<V> {
    /// Create a strategy using the bundled `reqwest` transport
    #[must_use]
    pub fn new(config: StrategyConfig, validator: V) -> Self {
        Self::with_transport(config, validator, Box::new(ReqwestTransport))
    }

    /// Create a strategy with a custom outbound transport
    #[must_use]
    pub fn with_transport(
        config: StrategyConfig,
        validator: V,
        transport: Box<dyn AuthHttpTransport>,
    ) -> Self {
        let state_codec = config.state_secret.as_deref().map(StateTokenCodec::new);
        Self {
            config,
            validator,
            transport,
            state_codec,
        }
    }

    /// Strategy name exposed to host frameworks
    #[must_use]
    pub const fn name(&self) -> &'static str {
        STRATEGY_NAME
    }

    /// The strategy configuration
    #[must_use]
    pub const fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Dispatch one inbound request through the login flow.
    ///
    /// Misconfigured credentials yield the fatal error outcome before
    /// anything else happens; requests outside the login and callback
    /// suffixes pass through with no side effects.
    pub async fn authenticate(&self, request: &InboundRequest) -> AuthOutcome<V::Identity> {
        if let Err(config_error) = self.config.validate() {
            error!(error = %config_error, "authsch strategy is misconfigured");
            return AuthOutcome::Error(config_error);
        }

        if request.path().ends_with(&self.config.login_path_suffix) {
            return self.login(request);
        }
        if request.path().ends_with(&self.config.callback_path_suffix) {
            return self.callback(request).await;
        }
        AuthOutcome::Pass
    }

    /// Build the authorization redirect. No network, no blocking.
    fn login(&self, request: &InboundRequest) -> AuthOutcome<V::Identity> {
        let mut url = match Url::parse(&self.config.endpoints.authorization_url) {
            Ok(url) => url,
            Err(parse_error) => {
                error!(
                    error = %parse_error,
                    url = %self.config.endpoints.authorization_url,
                    "invalid authorization endpoint URL"
                );
                return AuthOutcome::Fail(RejectionStatus::Unauthorized);
            }
        };

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("response_type", "code")
                .append_pair("client_id", &self.config.client_id)
                .append_pair("scope", &self.config.scope_parameter());
            if let Some(redirect_uri) = &self.config.redirect_uri {
                pairs.append_pair("redirect_uri", redirect_uri);
            }
            if let Some(codec) = &self.state_codec {
                pairs.append_pair("state", &codec.issue(request.client_ip()));
            }
        }

        AuthOutcome::Redirect(url.into())
    }

    /// Run the authorization-code callback.
    async fn callback(&self, request: &InboundRequest) -> AuthOutcome<V::Identity> {
        if let Some(provider_error) = request.provider_error() {
            let description = request
                .provider_error_description()
                .unwrap_or(provider_error);
            error!(error = %provider_error, "AuthSCH reported an authorization error: {description}");
            return AuthOutcome::Fail(RejectionStatus::Unauthorized);
        }

        let Some(code) = request.code() else {
            error!("no authorization code received from AuthSCH");
            return AuthOutcome::Fail(RejectionStatus::Unauthorized);
        };

        if let Some(codec) = &self.state_codec {
            let Some(state) = request.state() else {
                warn!("callback request missing the state parameter");
                return AuthOutcome::Fail(RejectionStatus::Unauthorized);
            };
            if let Err(state_error) = codec.verify(state, request.client_ip()) {
                warn!(
                    error = %state_error,
                    client_ip = %request.client_ip(),
                    "login state verification failed"
                );
                return AuthOutcome::Fail(RejectionStatus::Forbidden);
            }
        }

        let token = match self.exchange_code(code).await {
            Ok(token) => token,
            Err(status) => return AuthOutcome::Fail(status),
        };

        let profile = match self.fetch_profile(&token.access_token).await {
            Ok(profile) => profile,
            Err(status) => return AuthOutcome::Fail(status),
        };

        match self.validator.validate(profile).await {
            Some(identity) => AuthOutcome::Success(identity),
            None => {
                warn!("validation hook rejected the authenticated profile");
                AuthOutcome::Fail(RejectionStatus::Unauthorized)
            }
        }
    }

    /// Exchange the authorization code for an access token.
    ///
    /// Any failure is terminal for this callback and maps to 401.
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, RejectionStatus> {
        let token_url = &self.config.endpoints.token_url;
        let mut form = vec![("grant_type", "authorization_code"), ("code", code)];
        if let Some(redirect_uri) = &self.config.redirect_uri {
            form.push(("redirect_uri", redirect_uri.as_str()));
        }

        let response = match self
            .transport
            .post_form(
                token_url,
                &self.config.client_id,
                &self.config.client_secret,
                &form,
            )
            .await
        {
            Ok(response) => response,
            Err(transport_error) => {
                error!(
                    error = %transport_error,
                    url = %token_url,
                    "token exchange request failed"
                );
                return Err(RejectionStatus::Unauthorized);
            }
        };

        if !response.is_success() {
            error!(
                status = response.status,
                url = %token_url,
                "fetching access token from AuthSCH failed"
            );
            return Err(RejectionStatus::Unauthorized);
        }
        if response.body.trim().is_empty() {
            error!(
                status = response.status,
                url = %token_url,
                "empty token response body from AuthSCH"
            );
            return Err(RejectionStatus::Unauthorized);
        }

        serde_json::from_str(&response.body).map_err(|decode_error| {
            error!(
                error = %decode_error,
                url = %token_url,
                "could not decode token response"
            );
            RejectionStatus::Unauthorized
        })
    }

    /// Fetch and normalize the profile for the configured API variant.
    async fn fetch_profile(&self, access_token: &str) -> Result<AuthSchProfile, RejectionStatus> {
        let (profile_url, use_bearer) = self.profile_request(access_token)?;
        // Never log profile_url: the legacy variant carries the access
        // token in its query string.
        let endpoint = match self.config.profile_api {
            ProfileApiVariant::Oidc => &self.config.endpoints.userinfo_url,
            ProfileApiVariant::Legacy => &self.config.endpoints.legacy_profile_url,
        };

        let bearer = use_bearer.then_some(access_token);
        let response = match self.transport.get(&profile_url, bearer).await {
            Ok(response) => response,
            Err(transport_error) => {
                error!(
                    error = %transport_error,
                    url = %endpoint,
                    "profile request failed"
                );
                return Err(RejectionStatus::Unauthorized);
            }
        };

        if !response.is_success() {
            error!(
                status = response.status,
                url = %endpoint,
                "fetching user profile from AuthSCH failed"
            );
            return Err(RejectionStatus::Unauthorized);
        }
        if response.body.trim().is_empty() {
            error!(url = %endpoint, "empty profile response body from AuthSCH");
            return Err(RejectionStatus::Unauthorized);
        }

        let normalized = match self.config.profile_api {
            ProfileApiVariant::Oidc => {
                serde_json::from_str::<RawOidcProfile>(&response.body).map(AuthSchProfile::from)
            }
            ProfileApiVariant::Legacy => {
                serde_json::from_str::<RawLegacyProfile>(&response.body).map(AuthSchProfile::from)
            }
        };

        normalized.map_err(|decode_error| {
            error!(
                error = %decode_error,
                url = %endpoint,
                "could not decode profile response"
            );
            RejectionStatus::Unauthorized
        })
    }

    /// Resolve the profile URL and authentication style per API variant.
    fn profile_request(&self, access_token: &str) -> Result<(String, bool), RejectionStatus> {
        match self.config.profile_api {
            ProfileApiVariant::Oidc => Ok((self.config.endpoints.userinfo_url.clone(), true)),
            ProfileApiVariant::Legacy => {
                let mut url = match Url::parse(&self.config.endpoints.legacy_profile_url) {
                    Ok(url) => url,
                    Err(parse_error) => {
                        error!(
                            error = %parse_error,
                            url = %self.config.endpoints.legacy_profile_url,
                            "invalid legacy profile endpoint URL"
                        );
                        return Err(RejectionStatus::Unauthorized);
                    }
                };
                // The legacy API takes the scope list as a path segment
                // and the access token in the query string.
                let scope_segment = self.config.scope_parameter().replace(' ', "+");
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push(&scope_segment);
                }
                url.query_pairs_mut()
                    .append_pair("access_token", access_token);
                Ok((url.into(), false))
            }
        }
    }
}

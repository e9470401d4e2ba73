// ABOUTME: Client configuration: base URLs, HTTP timeouts, proactive refresh, credentials from env
// ABOUTME: Environment-only loading in the same style as the server's deployment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the Fitbit client

use crate::constants::{env_config, http, API_URI, AUTHORIZE_URI, TOKEN_URI};
use crate::errors::{FitbitError, FitbitResult};
use crate::oauth::ExpiresAt;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Per-client settings. `Default` talks to the production Fitbit API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL for resource endpoints, without trailing slash
    pub api_base_url: String,
    /// OAuth2 token endpoint
    pub token_url: String,
    /// OAuth2 authorization endpoint
    pub authorize_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// User agent header value
    pub user_agent: String,
    /// Refresh the access token before a request when it expires within five minutes
    pub refresh_before_expiry: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_URI.to_owned(),
            token_url: TOKEN_URI.to_owned(),
            authorize_url: AUTHORIZE_URI.to_owned(),
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: http::DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: http::USER_AGENT.to_owned(),
            refresh_before_expiry: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var(env_config::API_BASE_URL)
                .map_or(defaults.api_base_url, |v| v.trim_end_matches('/').to_owned()),
            token_url: env::var(env_config::TOKEN_URL).unwrap_or(defaults.token_url),
            authorize_url: env::var(env_config::AUTHORIZE_URL).unwrap_or(defaults.authorize_url),
            timeout_secs: parse_secs(env_config::HTTP_TIMEOUT_SECS, defaults.timeout_secs),
            connect_timeout_secs: parse_secs(
                env_config::CONNECT_TIMEOUT_SECS,
                defaults.connect_timeout_secs,
            ),
            user_agent: defaults.user_agent,
            refresh_before_expiry: env::var(env_config::REFRESH_BEFORE_EXPIRY)
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.refresh_before_expiry),
        }
    }

    /// Point resource calls at a different base URL (test servers, proxies)
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_base_url = url.trim_end_matches('/').to_owned();
        self
    }

    /// Point token refresh at a different endpoint
    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Toggle the refresh-before-expiry behavior
    #[must_use]
    pub const fn with_refresh_before_expiry(mut self, enabled: bool) -> Self {
        self.refresh_before_expiry = enabled;
        self
    }
}

fn parse_secs(var: &str, default: u64) -> u64 {
    match env::var(var) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring non-numeric {var}={raw}, using {default}");
            default
        }),
        Err(_) => default,
    }
}

/// Bootstrap values for a client, obtained out of band by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Current access token
    pub access_token: String,
    /// Current refresh token
    pub refresh_token: String,
    /// Access token expiry
    pub expires_at: ExpiresAt,
}

impl ClientCredentials {
    /// Read credentials from `FITBIT_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` naming the first variable that is unset or blank
    pub fn from_env() -> FitbitResult<Self> {
        let expires_at = match env::var(env_config::EXPIRES_AT) {
            Ok(raw) if !raw.trim().is_empty() => ExpiresAt::parse(raw.trim())?,
            _ => ExpiresAt::Unknown,
        };

        Ok(Self {
            client_id: required(env_config::CLIENT_ID, "client_id")?,
            client_secret: required(env_config::CLIENT_SECRET, "client_secret")?,
            access_token: required(env_config::ACCESS_TOKEN, "token")?,
            refresh_token: required(env_config::REFRESH_TOKEN, "refresh_token")?,
            expires_at,
        })
    }
}

fn required(var: &str, field: &'static str) -> FitbitResult<String> {
    env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(FitbitError::MissingCredential { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_production() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "https://api.fitbit.com/1");
        assert_eq!(config.token_url, "https://api.fitbit.com/oauth2/token");
        assert!(!config.refresh_before_expiry);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_with_api_base_url_strips_trailing_slash() {
        let config = ClientConfig::default().with_api_base_url("http://127.0.0.1:9000/1/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000/1");
    }

    #[test]
    fn test_config_deserializes_with_partial_fields() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"timeout_secs": 5, "refresh_before_expiry": true}"#).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.refresh_before_expiry);
        assert_eq!(config.api_base_url, API_URI);
    }
}

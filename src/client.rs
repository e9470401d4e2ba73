// ABOUTME: FitbitClient owns the token manager and performs authenticated GET/POST/DELETE calls
// ABOUTME: Response normalization: GET falls back to raw text, POST requires JSON, DELETE is raw
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request dispatch
//!
//! Every endpoint builder in [`crate::api`] ends in exactly one of
//! [`FitbitClient::get`], [`FitbitClient::post`] or [`FitbitClient::delete`].
//! The three differ on purpose in how they treat the response body:
//!
//! | verb   | non-JSON body                 | non-2xx status        |
//! |--------|-------------------------------|-----------------------|
//! | GET    | returned as [`ApiResponse::Text`] | body returned as-is |
//! | POST   | [`FitbitError::Decode`]       | body returned as-is   |
//! | DELETE | not read                      | response returned     |

use crate::config::{ClientConfig, ClientCredentials};
use crate::errors::{FitbitError, FitbitResult};
use crate::http_client::{api_client, create_custom_client};
use crate::oauth::{Credential, ExpiresAt, TokenManager};
use reqwest::{Client, ClientBuilder, Method, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Placeholder for calls that send no request body
pub(crate) const NO_BODY: Option<&()> = None;

/// Decoded body of a GET request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    /// Body parsed as JSON
    Json(Value),
    /// Body that is not JSON, such as a TCX export
    Text(String),
}

impl ApiResponse {
    /// JSON value, if the body parsed
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Consume into the JSON value, if the body parsed
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Raw text, if the body did not parse
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Fitbit Web API client
///
/// Holds one live credential. Methods that talk to the network take
/// `&mut self` so a refresh can never interleave with another request on the
/// same client; use one client per task for concurrency.
#[derive(Debug)]
pub struct FitbitClient {
    config: ClientConfig,
    http: Client,
    tokens: TokenManager,
}

impl FitbitClient {
    /// Create a client for the production API from bootstrap credentials. No network call.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` if any required field is blank
    pub fn new(
        client_id: &str,
        client_secret: &str,
        token: &str,
        refresh_token: &str,
        expires_at: impl Into<ExpiresAt>,
    ) -> FitbitResult<Self> {
        let config = ClientConfig::default();
        let tokens = TokenManager::new(
            client_id,
            client_secret,
            token,
            refresh_token,
            expires_at,
            config.token_url.as_str(),
        )?;
        Ok(Self::from_token_manager(tokens, config))
    }

    /// Create a client with explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` if any required field is blank
    pub fn with_config(credentials: ClientCredentials, config: ClientConfig) -> FitbitResult<Self> {
        let tokens = token_manager(&credentials, &config)?;
        Ok(Self::from_token_manager(tokens, config))
    }

    /// Create a client whose HTTP transport is further customized (proxies, TLS roots)
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` if any required field is blank
    pub fn with_http_customizer<F>(
        credentials: ClientCredentials,
        config: ClientConfig,
        customize: F,
    ) -> FitbitResult<Self>
    where
        F: FnOnce(ClientBuilder) -> ClientBuilder,
    {
        let tokens = token_manager(&credentials, &config)?;
        let http = create_custom_client(&config, customize);
        Ok(Self {
            config,
            http,
            tokens,
        })
    }

    /// Create a client from `FITBIT_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` for unset variables and `InvalidArgument` for a bad expiry
    pub fn from_env() -> FitbitResult<Self> {
        Self::with_config(ClientCredentials::from_env()?, ClientConfig::from_env())
    }

    /// Wrap an existing token manager, e.g. one produced by `TokenManager::exchange_code`
    #[must_use]
    pub fn from_token_manager(tokens: TokenManager, config: ClientConfig) -> Self {
        Self {
            http: api_client(&config),
            config,
            tokens,
        }
    }

    /// Rotate the access/refresh token pair
    ///
    /// # Errors
    ///
    /// Returns `Transport`, `TokenRefreshRejected` or `Decode`; the previous credential stays live
    pub async fn refresh(&mut self) -> FitbitResult<&Credential> {
        self.tokens.refresh(&self.http).await
    }

    /// The live credential, for the caller to persist
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        self.tokens.credential()
    }

    /// Token manager backing this client
    #[must_use]
    pub const fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for a resource path relative to the API base
    #[must_use]
    pub fn resource_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_base_url,
            path.trim_start_matches('/')
        )
    }

    /// Authenticated GET. Never fails on status; falls back to raw text when the body is not JSON.
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure, or a refresh error when proactive refresh is enabled
    #[instrument(skip(self), fields(provider = "fitbit", method = "GET"))]
    pub async fn get(&mut self, url: &str) -> FitbitResult<ApiResponse> {
        let response = self.send(Method::GET, url, NO_BODY).await?;
        let body = response.text().await?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(ApiResponse::Json(value)),
            Err(e) => {
                warn!(
                    "Response from {url} is not JSON ({e}), returning {} bytes of raw text",
                    body.len()
                );
                Ok(ApiResponse::Text(body))
            }
        }
    }

    /// Authenticated POST with an optional form-encoded body. The response must be JSON.
    ///
    /// `None` fields of `body` are omitted by the form encoder.
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    #[instrument(skip(self, body), fields(provider = "fitbit", method = "POST"))]
    pub async fn post<B>(&mut self, url: &str, body: Option<&B>) -> FitbitResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(Method::POST, url, body).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| FitbitError::decode(url, text, e))
    }

    /// Authenticated DELETE. The response is returned undecoded so callers can check the status.
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure
    #[instrument(skip(self, body), fields(provider = "fitbit", method = "DELETE"))]
    pub async fn delete<B>(&mut self, url: &str, body: Option<&B>) -> FitbitResult<Response>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::DELETE, url, body).await
    }

    async fn send<B>(&mut self, method: Method, url: &str, body: Option<&B>) -> FitbitResult<Response>
    where
        B: Serialize + ?Sized,
    {
        if self.config.refresh_before_expiry && self.credential().will_expire_soon() {
            debug!("Access token expires soon, refreshing before request");
            self.refresh().await?;
        }

        debug!("Making HTTP {method} request to: {url}");

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(self.tokens.credential().access_token());
        if let Some(body) = body {
            request = request.form(body);
        }

        let response = request.send().await?;
        debug!("Received HTTP response with status: {}", response.status());
        Ok(response)
    }
}

fn token_manager(credentials: &ClientCredentials, config: &ClientConfig) -> FitbitResult<TokenManager> {
    TokenManager::new(
        &credentials.client_id,
        &credentials.client_secret,
        &credentials.access_token,
        &credentials.refresh_token,
        credentials.expires_at,
        config.token_url.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FitbitClient {
        FitbitClient::new("id", "secret", "access", "refresh", ExpiresAt::Unknown).unwrap()
    }

    #[test]
    fn test_resource_url_joins_base_and_path() {
        let client = client();
        assert_eq!(
            client.resource_url("user/-/activities/date/2024-01-15.json"),
            "https://api.fitbit.com/1/user/-/activities/date/2024-01-15.json"
        );
        assert_eq!(
            client.resource_url("/activities.json"),
            "https://api.fitbit.com/1/activities.json"
        );
    }

    #[test]
    fn test_api_response_accessors() {
        let json = ApiResponse::Json(serde_json::json!({"ok": true}));
        assert!(json.as_json().is_some());
        assert!(json.as_text().is_none());

        let text = ApiResponse::Text("<TrainingCenterDatabase/>".into());
        assert_eq!(text.as_text(), Some("<TrainingCenterDatabase/>"));
        assert!(text.into_json().is_none());
    }

    #[test]
    fn test_api_response_serializes_untagged() {
        let text = ApiResponse::Text("raw".into());
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"raw\"");
    }
}

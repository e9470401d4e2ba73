// ABOUTME: OAuth2 credential state and the refresh-token grant against the Fitbit token endpoint
// ABOUTME: Credentials are replaced wholesale on refresh; a failed refresh leaves them untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Token management
//!
//! The caller completes the authorization-code exchange out of band (or with
//! [`TokenManager::exchange_code`]) and hands the resulting tokens to
//! [`TokenManager::new`]. From then on [`TokenManager::refresh`] rotates the
//! access/refresh pair using HTTP Basic client authentication, as Fitbit
//! requires for server-side apps.
//!
//! - [Authorization guide](https://dev.fitbit.com/build/reference/web-api/developer-guide/authorization/)

use crate::constants::oauth::{DEFAULT_SCOPES, REFRESH_MARGIN_SECS};
use crate::errors::{FitbitError, FitbitResult};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Access token expiry as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiresAt {
    /// Absolute expiry instant
    At(DateTime<Utc>),
    /// Caller did not record an expiry
    Unknown,
}

impl ExpiresAt {
    /// Parse either unix seconds (`1718000000`) or an RFC 3339 timestamp
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the value is neither form
    pub fn parse(raw: &str) -> FitbitResult<Self> {
        if let Ok(secs) = raw.parse::<i64>() {
            return DateTime::from_timestamp(secs, 0).map(Self::At).ok_or_else(|| {
                FitbitError::invalid_argument("expires_at", format!("timestamp out of range: {raw}"))
            });
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| Self::At(dt.with_timezone(&Utc)))
            .map_err(|e| FitbitError::invalid_argument("expires_at", format!("{raw}: {e}")))
    }

    /// Expiry instant, if known
    #[must_use]
    pub const fn instant(self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(at) => Some(at),
            Self::Unknown => None,
        }
    }
}

impl From<DateTime<Utc>> for ExpiresAt {
    fn from(at: DateTime<Utc>) -> Self {
        Self::At(at)
    }
}

impl From<Option<DateTime<Utc>>> for ExpiresAt {
    fn from(at: Option<DateTime<Utc>>) -> Self {
        at.map_or(Self::Unknown, Self::At)
    }
}

/// The live access/refresh token pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    access_token: String,
    refresh_token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    /// Build a credential from raw token values
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: impl Into<ExpiresAt>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at: expires_at.into().instant(),
        }
    }

    /// Bearer token attached to resource requests
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Token exchanged for a new access token
    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Expiry instant, if known
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Check if the token is expired. Unknown expiry counts as valid.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_within(Duration::zero())
    }

    /// Check if the token expires within `margin` from now
    #[must_use]
    pub fn expires_within(&self, margin: Duration) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at <= Utc::now() + margin)
    }

    /// Check if the token will expire within the proactive refresh window
    #[must_use]
    pub fn will_expire_soon(&self) -> bool {
        self.expires_within(Duration::seconds(REFRESH_MARGIN_SECS))
    }

    fn from_token_response(response: TokenResponse, previous_refresh: Option<&str>) -> FitbitResult<Self> {
        let refresh_token = response
            .refresh_token
            .or_else(|| previous_refresh.map(str::to_owned))
            .ok_or(FitbitError::MissingCredential {
                field: "refresh_token",
            })?;

        let expires_at = match response.expires_in {
            Some(seconds) => Some(
                Duration::try_seconds(seconds)
                    .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
                    .ok_or_else(|| FitbitError::InvalidTokenResponse {
                        details: format!("expires_in out of range: {seconds}"),
                    })?,
            ),
            None => None,
        };

        Ok(Self {
            access_token: response.access_token,
            refresh_token,
            expires_at,
        })
    }
}

// Tokens never end up in logs through Debug
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"[redacted]")
            .field("refresh_token", &"[redacted]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Token endpoint response body
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// New access token
    pub access_token: String,
    /// New refresh token; Fitbit always rotates it, other servers may omit it
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds
    pub expires_in: Option<i64>,
    /// Granted scopes, space separated
    pub scope: Option<String>,
    /// Encoded id of the user the token belongs to
    pub user_id: Option<String>,
}

/// Owns the client identity and the single live [`Credential`]
#[derive(Clone)]
pub struct TokenManager {
    client_id: String,
    basic_token: String,
    credential: Credential,
    token_url: String,
}

impl TokenManager {
    /// Build the initial state from caller-supplied bootstrap values. No network call.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` if any of the id, secret, or tokens is blank
    pub fn new(
        client_id: &str,
        client_secret: &str,
        token: &str,
        refresh_token: &str,
        expires_at: impl Into<ExpiresAt>,
        token_url: impl Into<String>,
    ) -> FitbitResult<Self> {
        non_blank(client_id, "client_id")?;
        non_blank(client_secret, "client_secret")?;
        non_blank(token, "token")?;
        non_blank(refresh_token, "refresh_token")?;

        Ok(Self {
            client_id: client_id.to_owned(),
            basic_token: basic_token(client_id, client_secret),
            credential: Credential::new(token, refresh_token, expires_at),
            token_url: token_url.into(),
        })
    }

    /// Complete the authorization-code grant and build a manager from the issued tokens
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure, `TokenRefreshRejected` on a non-2xx
    /// answer and `Decode` when the body is not a token response
    #[instrument(skip(http, client_secret, code, code_verifier), fields(provider = "fitbit"))]
    pub async fn exchange_code(
        http: &Client,
        token_url: &str,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: &str,
        code_verifier: Option<&str>,
    ) -> FitbitResult<Self> {
        non_blank(client_id, "client_id")?;
        non_blank(client_secret, "client_secret")?;
        if code.trim().is_empty() {
            return Err(FitbitError::invalid_argument(
                "exchange_code",
                "authorization code is blank",
            ));
        }

        let mut params = vec![
            ("client_id", client_id),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ];
        if let Some(verifier) = code_verifier {
            params.push(("code_verifier", verifier));
        }

        let basic = basic_token(client_id, client_secret);
        let response = post_token_request(http, token_url, &basic, &params).await?;
        let credential = Credential::from_token_response(response, None)?;
        info!("Fitbit authorization code exchanged");

        Ok(Self {
            client_id: client_id.to_owned(),
            basic_token: basic,
            credential,
            token_url: token_url.to_owned(),
        })
    }

    /// Rotate the token pair with the refresh-token grant
    ///
    /// The stored credential is replaced only after a complete, valid response
    /// has been decoded; every failure leaves the previous credential in effect.
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure, `TokenRefreshRejected` on a non-2xx
    /// answer and `Decode` when the body is not a token response
    #[instrument(skip(self, http), fields(provider = "fitbit", client_id = %self.client_id))]
    pub async fn refresh(&mut self, http: &Client) -> FitbitResult<&Credential> {
        info!("Refreshing Fitbit access token");

        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", self.credential.refresh_token()),
        ];
        let response = post_token_request(http, &self.token_url, &self.basic_token, &params).await?;
        let credential =
            Credential::from_token_response(response, Some(self.credential.refresh_token()))?;

        self.credential = credential;
        info!(expires_at = ?self.credential.expires_at, "Fitbit token refreshed successfully");
        Ok(&self.credential)
    }

    /// The live credential
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// OAuth2 client id
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Precomputed `base64(client_id:client_secret)` used for the Basic header
    #[must_use]
    pub fn basic_token(&self) -> &str {
        &self.basic_token
    }

    /// Token endpoint this manager refreshes against
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

impl fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenManager")
            .field("client_id", &self.client_id)
            .field("credential", &self.credential)
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}

/// Build the URL the user visits to grant access
///
/// Uses [`DEFAULT_SCOPES`] when `scopes` is empty.
///
/// # Errors
///
/// Returns `InvalidUrl` if `authorize_url` is malformed
pub fn authorization_url(
    authorize_url: &str,
    client_id: &str,
    redirect_uri: &str,
    scopes: &[&str],
    state: &str,
) -> FitbitResult<String> {
    let scopes = if scopes.is_empty() { DEFAULT_SCOPES } else { scopes };

    let mut url = Url::parse(authorize_url)?;
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", &scopes.join(" "))
        .append_pair("state", state);

    Ok(url.to_string())
}

fn basic_token(client_id: &str, client_secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{client_id}:{client_secret}"))
}

fn non_blank(value: &str, field: &'static str) -> FitbitResult<()> {
    if value.trim().is_empty() {
        return Err(FitbitError::MissingCredential { field });
    }
    Ok(())
}

async fn post_token_request(
    http: &Client,
    token_url: &str,
    basic: &str,
    params: &[(&str, &str)],
) -> FitbitResult<TokenResponse> {
    debug!("POST {token_url}");

    let response = http
        .post(token_url)
        .header(AUTHORIZATION, format!("Basic {basic}"))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .form(params)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        error!(
            "Fitbit token request failed - status: {status}, body_length: {} bytes",
            body.len()
        );
        return Err(FitbitError::TokenRefreshRejected { status, body });
    }

    serde_json::from_str(&body).map_err(|e| FitbitError::decode(token_url, body, e))
}

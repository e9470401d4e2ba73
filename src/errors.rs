// ABOUTME: Error taxonomy for the Fitbit client: configuration, transport, decode, token refresh
// ABOUTME: Lets callers branch on cause instead of matching on message strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Client Error Types
//!
//! - `InvalidArgument` / `MissingCredential` are raised before any request is sent
//! - `Transport` wraps the underlying reqwest failure unmodified
//! - `Decode` carries the raw body that failed to parse
//! - `TokenRefreshRejected` is a non-2xx answer from the token endpoint
//! - `InvalidTokenResponse` is a 2xx token response with unusable values
//! - `UnexpectedResponse` is a resource body missing the fields an operation reads
//!
//! Non-2xx answers from resource endpoints are not errors: the decoded
//! Fitbit error envelope is returned to the caller as-is, unless an
//! operation has to read fields out of it first (`update_alarm`).

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the Fitbit client
#[derive(Debug, Error)]
pub enum FitbitError {
    /// No valid parameter combination was supplied to an endpoint builder
    #[error("invalid arguments for {operation}: {details}")]
    InvalidArgument {
        /// Endpoint builder that rejected its arguments
        operation: &'static str,
        /// Which combination was missing or malformed
        details: String,
    },

    /// A required credential field was blank at construction
    #[error("missing credential field: {field}")]
    MissingCredential {
        /// Name of the missing field
        field: &'static str,
    },

    /// Network, timeout or TLS failure from the HTTP transport
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not JSON where JSON was required
    #[error("failed to decode JSON response from {url}: {source}")]
    Decode {
        /// URL the body came from
        url: String,
        /// Raw response body
        body: String,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Token endpoint answered with a non-success status
    #[error("token refresh rejected with status {status}: {body}")]
    TokenRefreshRejected {
        /// HTTP status returned by the token endpoint
        status: StatusCode,
        /// Raw response body, usually Fitbit's error envelope
        body: String,
    },

    /// Token endpoint answered 2xx with values that cannot form a credential
    #[error("invalid token response: {details}")]
    InvalidTokenResponse {
        /// Which value was unusable
        details: String,
    },

    /// A resource body lacked the fields an operation needs
    #[error("unexpected response from {url}: {body}")]
    UnexpectedResponse {
        /// URL the body came from
        url: String,
        /// Raw response body, usually Fitbit's error envelope
        body: String,
    },

    /// A configured URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result alias used across the crate
pub type FitbitResult<T> = Result<T, FitbitError>;

impl FitbitError {
    /// Create an "invalid argument" error
    #[must_use]
    pub fn invalid_argument(operation: &'static str, details: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            details: details.into(),
        }
    }

    /// Create a "decode" error
    #[must_use]
    pub fn decode(url: impl Into<String>, body: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            body: body.into(),
            source,
        }
    }

    /// True for errors raised before any network call
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::MissingCredential { .. } | Self::InvalidUrl(_)
        )
    }

    /// True for errors coming from the HTTP transport itself
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// True when a body could not be decoded into the expected shape
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. } | Self::InvalidTokenResponse { .. } | Self::UnexpectedResponse { .. }
        )
    }
}

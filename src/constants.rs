// ABOUTME: Fixed endpoint URIs, defaults, and environment variable names for the Fitbit client
// ABOUTME: Process-wide immutable values; per-client overrides live in ClientConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Base URI for Fitbit resource endpoints
pub const API_URI: &str = "https://api.fitbit.com/1";

/// OAuth2 token endpoint used for the refresh-token and authorization-code grants
pub const TOKEN_URI: &str = "https://api.fitbit.com/oauth2/token";

/// OAuth2 authorization endpoint the user is sent to out of band
pub const AUTHORIZE_URI: &str = "https://www.fitbit.com/oauth2/authorize";

/// User-id wildcard meaning "the authenticated user"
pub const CURRENT_USER: &str = "-";

/// HTTP timeouts and client identification
pub mod http {
    /// Request timeout in seconds for resource calls
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
    /// Connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("fitbit-web-api/", env!("CARGO_PKG_VERSION"));
}

/// OAuth token lifecycle tuning
pub mod oauth {
    /// Window before expiry in which a proactive refresh is triggered
    pub const REFRESH_MARGIN_SECS: i64 = 300;
    /// Scopes requested by `authorization_url` when the caller passes none
    pub const DEFAULT_SCOPES: &[&str] = &[
        "activity",
        "heartrate",
        "profile",
        "settings",
        "sleep",
        "social",
        "weight",
    ];
}

/// Environment variable names read by `ClientConfig::from_env` and `ClientCredentials::from_env`
pub mod env_config {
    /// Overrides the resource base URL
    pub const API_BASE_URL: &str = "FITBIT_API_BASE_URL";
    /// Overrides the token endpoint
    pub const TOKEN_URL: &str = "FITBIT_TOKEN_URL";
    /// Overrides the OAuth2 authorization endpoint
    pub const AUTHORIZE_URL: &str = "FITBIT_AUTHORIZE_URL";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "FITBIT_HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "FITBIT_CONNECT_TIMEOUT_SECS";
    /// Enables refresh before each request when the token is about to expire
    pub const REFRESH_BEFORE_EXPIRY: &str = "FITBIT_REFRESH_BEFORE_EXPIRY";
    /// OAuth2 client id
    pub const CLIENT_ID: &str = "FITBIT_CLIENT_ID";
    /// OAuth2 client secret
    pub const CLIENT_SECRET: &str = "FITBIT_CLIENT_SECRET";
    /// Current access token
    pub const ACCESS_TOKEN: &str = "FITBIT_ACCESS_TOKEN";
    /// Current refresh token
    pub const REFRESH_TOKEN: &str = "FITBIT_REFRESH_TOKEN";
    /// Access token expiry, unix seconds or RFC 3339
    pub const EXPIRES_AT: &str = "FITBIT_EXPIRES_AT";
}

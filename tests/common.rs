// ABOUTME: Shared test utilities for integration tests against a wiremock Fitbit stand-in
// ABOUTME: Builds clients whose resource and token URLs point at the mock server
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fitbit_web_api`

use fitbit_web_api::{ClientConfig, ClientCredentials, ExpiresAt, FitbitClient};
use wiremock::MockServer;

pub const CLIENT_ID: &str = "22ABCD";
pub const CLIENT_SECRET: &str = "s3cr3t";
pub const ACCESS_TOKEN: &str = "access-0";
pub const REFRESH_TOKEN: &str = "refresh-0";

/// `base64("22ABCD:s3cr3t")`
pub const BASIC_HEADER: &str = "Basic MjJBQkNEOnMzY3IzdA==";

/// Resource base URL served by the mock
pub fn api_base(server: &MockServer) -> String {
    format!("{}/1", server.uri())
}

/// Configuration pointing both resource and token calls at the mock
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_api_base_url(api_base(server))
        .with_token_url(format!("{}/oauth2/token", server.uri()))
}

pub fn test_credentials(expires_at: ExpiresAt) -> ClientCredentials {
    ClientCredentials {
        client_id: CLIENT_ID.to_owned(),
        client_secret: CLIENT_SECRET.to_owned(),
        access_token: ACCESS_TOKEN.to_owned(),
        refresh_token: REFRESH_TOKEN.to_owned(),
        expires_at,
    }
}

/// Client with an unknown expiry, so no proactive refresh can happen
pub fn test_client(server: &MockServer) -> FitbitClient {
    FitbitClient::with_config(test_credentials(ExpiresAt::Unknown), test_config(server))
        .expect("valid test credentials")
}

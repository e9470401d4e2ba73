// ABOUTME: reqwest client construction with configured timeouts and user agent
// ABOUTME: One connection pool per FitbitClient; pooling policy is reqwest's default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ClientConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::warn;

/// Create the HTTP client used for both resource and token calls
///
/// Falls back to a default client if the builder rejects the configuration.
#[must_use]
pub fn api_client(config: &ClientConfig) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to build configured HTTP client, using defaults: {e}");
            Client::new()
        })
}

/// Create an HTTP client with custom configuration on top of the configured timeouts
#[must_use]
pub fn create_custom_client<F>(config: &ClientConfig, config_fn: F) -> Client
where
    F: FnOnce(ClientBuilder) -> ClientBuilder,
{
    let builder = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(config.user_agent.as_str());
    config_fn(builder).build().unwrap_or_else(|e| {
        warn!("Failed to build customized HTTP client, using defaults: {e}");
        Client::new()
    })
}

// ABOUTME: Library entry point for the Fitbit Web API client
// ABOUTME: Exposes the OAuth2 token manager, the request dispatcher and typed endpoint builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitbit Web API client
//!
//! An async client for the Fitbit Web API that keeps an `OAuth2` credential
//! alive and exposes the resource endpoints as typed builders.
//!
//! ## Layers
//!
//! - **`oauth`**: credential state and the refresh-token grant
//! - **`client`**: authenticated GET/POST/DELETE with fixed decode rules
//! - **`api`**: one method per Fitbit endpoint, grouped by resource family
//! - **`config`** / **`logging`**: environment driven setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitbit_web_api::api::{Period, TimeSeriesRange};
//! use fitbit_web_api::constants::CURRENT_USER;
//! use fitbit_web_api::{FitbitClient, FitbitResult};
//!
//! #[tokio::main]
//! async fn main() -> FitbitResult<()> {
//!     let mut client = FitbitClient::from_env()?;
//!
//!     let steps = client
//!         .activity_time_series(
//!             CURRENT_USER,
//!             "activities/steps",
//!             &TimeSeriesRange::by_period("today", Period::SevenDays),
//!         )
//!         .await?;
//!     println!("{steps:?}");
//!
//!     // Persist the rotated pair if a refresh happened
//!     let credential = client.credential();
//!     println!("expires at {:?}", credential.expires_at());
//!     Ok(())
//! }
//! ```

/// Endpoint builders and their parameter and body types
pub mod api;

/// Request dispatcher
pub mod client;

/// Client and credential configuration
pub mod config;

/// Fitbit URLs and defaults
pub mod constants;

/// Error types
pub mod errors;

/// HTTP transport construction
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// `OAuth2` credential management
pub mod oauth;

pub use client::{ApiResponse, FitbitClient};
pub use config::{ClientConfig, ClientCredentials};
pub use errors::{FitbitError, FitbitResult};
pub use oauth::{authorization_url, Credential, ExpiresAt, TokenManager};

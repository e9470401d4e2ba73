// ABOUTME: Integration tests for the OAuth2 refresh-token grant
// ABOUTME: Covers credential rotation, failure atomicity and proactive refresh
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::{
    test_client, test_config, test_credentials, ACCESS_TOKEN, BASIC_HEADER, CLIENT_ID,
    CLIENT_SECRET, REFRESH_TOKEN,
};
use fitbit_web_api::{ExpiresAt, FitbitClient, FitbitError, TokenManager};
use serde_json::json;
use wiremock::matchers::{body_string, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_refresh_replaces_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header("Authorization", BASIC_HEADER))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=refresh-0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "expires_in": 28800,
            "token_type": "Bearer",
            "user_id": "ABC123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    let before = Utc::now();
    let credential = client.refresh().await.unwrap().clone();

    assert_eq!(credential.access_token(), "access-1");
    assert_eq!(credential.refresh_token(), "refresh-1");
    let expires_at = credential.expires_at().expect("expiry from expires_in");
    assert!(expires_at >= before + Duration::seconds(28800));
    assert!(expires_at <= Utc::now() + Duration::seconds(28800));
}

#[tokio::test]
async fn test_refreshed_token_used_for_next_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1/user/-/profile.json"))
        .and(header("Authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"encodedId": "ABC123"}})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    client.refresh().await.unwrap();
    let profile = client.profile("-").await.unwrap();

    assert_eq!(
        profile.as_json().unwrap()["user"]["encodedId"],
        json!("ABC123")
    );
}

#[tokio::test]
async fn test_refresh_keeps_refresh_token_when_omitted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "access-1"})))
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    let credential = client.refresh().await.unwrap();

    assert_eq!(credential.access_token(), "access-1");
    assert_eq!(credential.refresh_token(), REFRESH_TOKEN);
    assert!(credential.expires_at().is_none());
}

#[tokio::test]
async fn test_rejected_refresh_leaves_credential_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{"errorType": "invalid_grant", "message": "Refresh token invalid"}],
            "success": false
        })))
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    let err = client.refresh().await.unwrap_err();

    match err {
        FitbitError::TokenRefreshRejected { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("expected TokenRefreshRejected, got {other:?}"),
    }
    assert_eq!(client.credential().access_token(), ACCESS_TOKEN);
    assert_eq!(client.credential().refresh_token(), REFRESH_TOKEN);
}

#[tokio::test]
async fn test_malformed_refresh_response_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    let err = client.refresh().await.unwrap_err();

    assert!(err.is_decode());
    assert_eq!(client.credential().access_token(), ACCESS_TOKEN);
}

#[tokio::test]
async fn test_unreachable_token_endpoint_is_transport_error() {
    let server = MockServer::start().await;
    let config = test_config(&server).with_token_url("http://127.0.0.1:1/oauth2/token");
    let mut client =
        FitbitClient::with_config(test_credentials(ExpiresAt::Unknown), config).unwrap();

    let err = client.refresh().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(client.credential().refresh_token(), REFRESH_TOKEN);
}

#[tokio::test]
async fn test_proactive_refresh_before_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "expires_in": 28800
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1/user/-/devices.json"))
        .and(header("Authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let expiring = ExpiresAt::At(Utc::now() + Duration::seconds(60));
    let config = test_config(&server).with_refresh_before_expiry(true);
    let mut client = FitbitClient::with_config(test_credentials(expiring), config).unwrap();

    client.devices("-").await.unwrap();
    assert_eq!(client.credential().refresh_token(), "refresh-1");
}

#[tokio::test]
async fn test_no_refresh_without_opt_in() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "x"})))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1/user/-/devices.json"))
        .and(header("Authorization", "Bearer access-0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let expired = ExpiresAt::At(Utc::now() - Duration::seconds(60));
    let mut client = FitbitClient::with_config(test_credentials(expired), test_config(&server)).unwrap();

    client.devices("-").await.unwrap();
    assert!(client.credential().is_expired());
}

#[test]
fn test_blank_bootstrap_values_rejected() {
    let err = FitbitClient::new("id", "secret", "", "refresh", ExpiresAt::Unknown).unwrap_err();
    assert!(matches!(
        err,
        FitbitError::MissingCredential { field: "token" }
    ));
}

#[tokio::test]
async fn test_out_of_range_expires_in_keeps_old_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "expires_in": i64::MAX
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = test_client(&server);
    let err = client.refresh().await.unwrap_err();

    assert!(matches!(err, FitbitError::InvalidTokenResponse { .. }));
    assert!(err.is_decode());
    assert_eq!(client.credential().access_token(), ACCESS_TOKEN);
    assert_eq!(client.credential().refresh_token(), REFRESH_TOKEN);
}

#[tokio::test]
async fn test_exchange_code_posts_authorization_code_grant() {
    let server = MockServer::start().await;
    let expected_body = serde_urlencoded::to_string([
        ("client_id", CLIENT_ID),
        ("grant_type", "authorization_code"),
        ("code", "code123"),
        ("redirect_uri", "https://app.example/callback"),
        ("code_verifier", "verifier-xyz"),
    ])
    .unwrap();

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header("Authorization", BASIC_HEADER))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "expires_in": 28800,
            "user_id": "ABC123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager = TokenManager::exchange_code(
        &reqwest::Client::new(),
        &format!("{}/oauth2/token", server.uri()),
        CLIENT_ID,
        CLIENT_SECRET,
        "code123",
        "https://app.example/callback",
        Some("verifier-xyz"),
    )
    .await
    .unwrap();

    assert_eq!(manager.client_id(), CLIENT_ID);
    assert_eq!(manager.credential().access_token(), "access-1");
    assert_eq!(manager.credential().refresh_token(), "refresh-1");
    assert!(manager.credential().expires_at().is_some());
}

// ABOUTME: Subscription endpoints for push notifications, optionally scoped to one collection
// ABOUTME: Add and delete require a subscription id and fail before any request without one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::params::Collection;
use crate::client::{ApiResponse, FitbitClient, NO_BODY};
use crate::errors::{FitbitError, FitbitResult};
use reqwest::Response;
use serde_json::Value;

fn subscriptions_path(user_id: &str, collection: Option<Collection>) -> String {
    collection.map_or_else(
        || format!("user/{user_id}/apiSubscriptions"),
        |collection| format!("user/{user_id}/{collection}/apiSubscriptions"),
    )
}

fn require_subscription_id(operation: &'static str, subscription_id: &str) -> FitbitResult<()> {
    if subscription_id.trim().is_empty() {
        return Err(FitbitError::invalid_argument(
            operation,
            "subscription_id is required",
        ));
    }
    Ok(())
}

impl FitbitClient {
    /// Subscribe to changes for all collections, or only `collection`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a blank `subscription_id` without sending a request,
    /// otherwise a dispatcher error
    pub async fn add_subscription(
        &mut self,
        user_id: &str,
        collection: Option<Collection>,
        subscription_id: &str,
    ) -> FitbitResult<Value> {
        require_subscription_id("add_subscription", subscription_id)?;
        let url = self.resource_url(&format!(
            "{}/{subscription_id}.json",
            subscriptions_path(user_id, collection)
        ));
        self.post(&url, NO_BODY).await
    }

    /// Subscriptions of the user, for all collections or only `collection`
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn list_subscriptions(
        &mut self,
        user_id: &str,
        collection: Option<Collection>,
    ) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("{}.json", subscriptions_path(user_id, collection)));
        self.get(&url).await
    }

    /// Remove a subscription
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a blank `subscription_id` without sending a request,
    /// otherwise `Transport`
    pub async fn delete_subscription(
        &mut self,
        user_id: &str,
        collection: Option<Collection>,
        subscription_id: &str,
    ) -> FitbitResult<Response> {
        require_subscription_id("delete_subscription", subscription_id)?;
        let url = self.resource_url(&format!(
            "{}/{subscription_id}.json",
            subscriptions_path(user_id, collection)
        ));
        self.delete(&url, NO_BODY).await
    }
}

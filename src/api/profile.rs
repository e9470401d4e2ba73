// ABOUTME: Profile endpoints: user profile, profile updates and badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::{ApiResponse, FitbitClient};
use crate::errors::FitbitResult;
use serde_json::Value;
use std::collections::BTreeMap;

impl FitbitClient {
    /// Profile of the user
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn profile(&mut self, user_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/profile.json"));
        self.get(&url).await
    }

    /// Update profile fields, e.g. `fullName` or `timezone`, sent as given
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn update_profile(
        &mut self,
        user_id: &str,
        fields: &BTreeMap<String, String>,
    ) -> FitbitResult<Value> {
        let url = self.resource_url(&format!("user/{user_id}/profile.json"));
        self.post(&url, Some(fields)).await
    }

    /// Badges earned by the user
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn badges(&mut self, user_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/badges.json"));
        self.get(&url).await
    }
}

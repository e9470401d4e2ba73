// ABOUTME: Body endpoints: body fat and weight logs, their time series and body goals
// ABOUTME: Weight units follow the Accept-Language locale Fitbit infers for the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::params::{GoalType, LogDateQuery, TimeSeriesRange};
use super::requests::{BodyFatGoal, BodyFatLog, WeightGoal, WeightLog};
use crate::client::{ApiResponse, FitbitClient, NO_BODY};
use crate::errors::FitbitResult;
use reqwest::Response;
use serde_json::Value;

impl FitbitClient {
    /// Body fat log entries for a day, a period or a date range
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn body_fat_logs(&mut self, user_id: &str, query: &LogDateQuery) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!(
            "user/{user_id}/body/log/fat/date/{}.json",
            query.path_segment()
        ));
        self.get(&url).await
    }

    /// Create a body fat log entry
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn log_body_fat(&mut self, user_id: &str, entry: &BodyFatLog) -> FitbitResult<Value> {
        let url = self.resource_url(&format!("user/{user_id}/body/log/fat.json"));
        self.post(&url, Some(entry)).await
    }

    /// Delete a body fat log entry
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure
    pub async fn delete_body_fat_log(&mut self, user_id: &str, log_id: u64) -> FitbitResult<Response> {
        let url = self.resource_url(&format!("user/{user_id}/body/log/fat/{log_id}.json"));
        self.delete(&url, NO_BODY).await
    }

    /// Body fat time series
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn body_fat_time_series(
        &mut self,
        user_id: &str,
        range: &TimeSeriesRange,
    ) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!(
            "user/{user_id}/body/log/fat/date/{}.json",
            range.path_segment()
        ));
        self.get(&url).await
    }

    /// Body fat or weight goal
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn body_goals(&mut self, user_id: &str, goal_type: GoalType) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/body/log/{goal_type}/goal.json"));
        self.get(&url).await
    }

    /// Set the body fat goal percentage
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn update_body_fat_goal(&mut self, user_id: &str, fat: f64) -> FitbitResult<Value> {
        let url = self.resource_url(&format!("user/{user_id}/body/log/fat/goal.json"));
        self.post(&url, Some(&BodyFatGoal { fat })).await
    }

    /// Set the weight goal
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn update_weight_goal(&mut self, user_id: &str, goal: &WeightGoal) -> FitbitResult<Value> {
        let url = self.resource_url(&format!("user/{user_id}/body/log/weight/goal.json"));
        self.post(&url, Some(goal)).await
    }

    /// Weight log entries for a day, a period or a date range
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn weight_logs(&mut self, user_id: &str, query: &LogDateQuery) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!(
            "user/{user_id}/body/log/weight/date/{}.json",
            query.path_segment()
        ));
        self.get(&url).await
    }

    /// Create a weight log entry
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn log_weight(&mut self, user_id: &str, entry: &WeightLog) -> FitbitResult<Value> {
        let url = self.resource_url(&format!("user/{user_id}/body/log/weight.json"));
        self.post(&url, Some(entry)).await
    }

    /// Delete a weight log entry
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure
    pub async fn delete_weight_log(&mut self, user_id: &str, log_id: u64) -> FitbitResult<Response> {
        let url = self.resource_url(&format!("user/{user_id}/body/log/weight/{log_id}.json"));
        self.delete(&url, NO_BODY).await
    }
}

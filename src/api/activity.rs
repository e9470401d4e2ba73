// ABOUTME: Activity endpoints: daily summaries, time series, logs, TCX exports, favorites and goals
// ABOUTME: Intraday queries need a Personal app type or explicit approval from Fitbit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::params::{ActivityLogsQuery, GoalPeriod, IntradayRange, TimeSeriesRange};
use super::requests::{ActivityGoals, LogActivity};
use crate::client::{ApiResponse, FitbitClient, NO_BODY};
use crate::errors::FitbitResult;
use reqwest::Response;
use serde_json::Value;
use tracing::instrument;
use url::Url;

impl FitbitClient {
    /// Daily activity summary for `date`
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    #[instrument(skip(self), fields(provider = "fitbit", api_call = "activity"))]
    pub async fn activity(&mut self, user_id: &str, date: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/activities/date/{date}.json"));
        self.get(&url).await
    }

    /// Time series for an activity resource path such as `activities/steps`
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    #[instrument(skip(self), fields(provider = "fitbit", api_call = "activity_time_series"))]
    pub async fn activity_time_series(
        &mut self,
        user_id: &str,
        resource_path: &str,
        range: &TimeSeriesRange,
    ) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!(
            "user/{user_id}/{resource_path}/date/{}.json",
            range.path_segment()
        ));
        self.get(&url).await
    }

    /// Intraday time series for an activity resource path
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    #[instrument(skip(self), fields(provider = "fitbit", api_call = "activity_intraday_time_series"))]
    pub async fn activity_intraday_time_series(
        &mut self,
        user_id: &str,
        resource_path: &str,
        range: &IntradayRange,
    ) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!(
            "user/{user_id}/{resource_path}/date/{}.json",
            range.path_segment()
        ));
        self.get(&url).await
    }

    /// Create an activity log entry
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` before any request when neither an activity id nor a
    /// custom name with calories is set, otherwise a dispatcher error
    pub async fn log_activity(&mut self, user_id: &str, entry: &LogActivity) -> FitbitResult<Value> {
        entry.validate()?;
        let url = self.resource_url(&format!("user/{user_id}/activities.json"));
        self.post(&url, Some(entry)).await
    }

    /// Delete an activity log entry
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure
    pub async fn delete_activity_log(&mut self, user_id: &str, log_id: u64) -> FitbitResult<Response> {
        let url = self.resource_url(&format!("user/{user_id}/activities/{log_id}.json"));
        self.delete(&url, NO_BODY).await
    }

    /// Page of activity log entries around a date
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if the configured base URL is malformed, otherwise a dispatcher error
    #[instrument(skip(self), fields(provider = "fitbit", api_call = "activity_logs_list"))]
    pub async fn activity_logs_list(
        &mut self,
        user_id: &str,
        query: &ActivityLogsQuery,
    ) -> FitbitResult<ApiResponse> {
        let mut url = Url::parse(&self.resource_url(&format!("user/{user_id}/activities/list.json")))?;
        let (cursor_key, cursor_date) = query.cursor.query_pair();
        url.query_pairs_mut()
            .append_pair(cursor_key, cursor_date)
            .append_pair("sort", &query.sort.to_string())
            .append_pair("limit", &query.limit.to_string())
            .append_pair("offset", &query.offset.to_string());

        self.get(url.as_str()).await
    }

    /// TCX export of a GPS activity log; the body is XML and comes back as text
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn activity_tcx(&mut self, user_id: &str, log_id: u64) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/activities/{log_id}.tcx"));
        self.get(&url).await
    }

    /// Full activity catalog
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn activity_types(&mut self) -> FitbitResult<ApiResponse> {
        let url = self.resource_url("activities.json");
        self.get(&url).await
    }

    /// One catalog activity
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn activity_type(&mut self, activity_id: u64) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("activities/{activity_id}.json"));
        self.get(&url).await
    }

    /// Activities the user logs most often
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn frequent_activities(&mut self, user_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/activities/frequent.json"));
        self.get(&url).await
    }

    /// Recently logged activities
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn recent_activities(&mut self, user_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/activities/recent.json"));
        self.get(&url).await
    }

    /// Activities marked as favorite
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn favorite_activities(&mut self, user_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/activities/favorite.json"));
        self.get(&url).await
    }

    /// Mark a catalog activity as favorite
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn add_favorite_activity(&mut self, user_id: &str, activity_id: u64) -> FitbitResult<Value> {
        let url = self.resource_url(&format!("user/{user_id}/activities/favorite/{activity_id}.json"));
        self.post(&url, NO_BODY).await
    }

    /// Remove an activity from the favorites
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure
    pub async fn delete_favorite_activity(
        &mut self,
        user_id: &str,
        activity_id: u64,
    ) -> FitbitResult<Response> {
        let url = self.resource_url(&format!("user/{user_id}/activities/favorite/{activity_id}.json"));
        self.delete(&url, NO_BODY).await
    }

    /// Daily or weekly activity goals
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn activity_goals(&mut self, user_id: &str, period: GoalPeriod) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/activities/goals/{period}.json"));
        self.get(&url).await
    }

    /// Create or update daily or weekly activity goals
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn update_activity_goals(
        &mut self,
        user_id: &str,
        period: GoalPeriod,
        goals: &ActivityGoals,
    ) -> FitbitResult<Value> {
        let url = self.resource_url(&format!("user/{user_id}/activities/goals/{period}.json"));
        self.post(&url, Some(goals)).await
    }

    /// Lifetime totals and best days
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn lifetime_stats(&mut self, user_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/activities.json"));
        self.get(&url).await
    }
}

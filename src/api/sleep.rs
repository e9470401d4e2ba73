// ABOUTME: Sleep endpoints: nightly logs, sleep time series and manual sleep entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::params::TimeSeriesRange;
use super::requests::SleepLog;
use crate::client::{ApiResponse, FitbitClient, NO_BODY};
use crate::errors::FitbitResult;
use reqwest::Response;
use serde_json::Value;

impl FitbitClient {
    /// Sleep logs for `date`
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn sleep_logs(&mut self, user_id: &str, date: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/sleep/date/{date}.json"));
        self.get(&url).await
    }

    /// Time series for a sleep resource path such as `sleep/minutesAsleep`
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn sleep_time_series(
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

    /// Create a sleep log entry
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn log_sleep(&mut self, user_id: &str, entry: &SleepLog) -> FitbitResult<Value> {
        let url = self.resource_url(&format!("user/{user_id}/sleep.json"));
        self.post(&url, Some(entry)).await
    }

    /// Delete a sleep log entry
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure
    pub async fn delete_sleep_log(&mut self, user_id: &str, log_id: u64) -> FitbitResult<Response> {
        let url = self.resource_url(&format!("user/{user_id}/sleep/{log_id}.json"));
        self.delete(&url, NO_BODY).await
    }
}

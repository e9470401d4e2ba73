// ABOUTME: Heart rate endpoints: daily zone summaries and intraday samples
// ABOUTME: Both are served under the activities/heart resource path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::params::{IntradayRange, TimeSeriesRange};
use crate::client::{ApiResponse, FitbitClient};
use crate::errors::FitbitResult;
use tracing::instrument;

const HEART_RESOURCE: &str = "activities/heart";

impl FitbitClient {
    /// Heart rate time series
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn heart_rate_time_series(
        &mut self,
        user_id: &str,
        range: &TimeSeriesRange,
    ) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!(
            "user/{user_id}/{HEART_RESOURCE}/date/{}.json",
            range.path_segment()
        ));
        self.get(&url).await
    }

    /// Intraday heart rate samples
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    #[instrument(skip(self), fields(provider = "fitbit", api_call = "heart_rate_intraday_time_series"))]
    pub async fn heart_rate_intraday_time_series(
        &mut self,
        user_id: &str,
        range: &IntradayRange,
    ) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!(
            "user/{user_id}/{HEART_RESOURCE}/date/{}.json",
            range.path_segment()
        ));
        self.get(&url).await
    }
}

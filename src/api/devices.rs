// ABOUTME: Device endpoints: paired trackers and their silent alarms
// ABOUTME: update_alarm reads the stored alarm first and posts the merged settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::requests::{AlarmUpdate, NewAlarm};
use crate::client::{ApiResponse, FitbitClient, NO_BODY};
use crate::errors::{FitbitError, FitbitResult};
use reqwest::Response;
use serde_json::Value;
use tracing::{instrument, warn};

impl FitbitClient {
    /// Devices paired with the account
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn devices(&mut self, user_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/devices.json"));
        self.get(&url).await
    }

    /// Alarms set on a tracker
    ///
    /// # Errors
    ///
    /// Returns a transport or refresh error from the dispatcher
    pub async fn alarms(&mut self, user_id: &str, tracker_id: &str) -> FitbitResult<ApiResponse> {
        let url = self.resource_url(&format!("user/{user_id}/devices/tracker/{tracker_id}/alarms.json"));
        self.get(&url).await
    }

    /// Add an alarm to a tracker
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure and `Decode` when the body is not JSON
    pub async fn add_alarm(&mut self, user_id: &str, tracker_id: &str, alarm: &NewAlarm) -> FitbitResult<Value> {
        let url = self.resource_url(&format!("user/{user_id}/devices/tracker/{tracker_id}/alarms.json"));
        self.post(&url, Some(alarm)).await
    }

    /// Update an alarm, keeping stored values for every field `update` leaves unset
    ///
    /// Returns `Ok(None)` without posting when the tracker has no alarm with `alarm_id`.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedResponse` carrying the body when the alarm listing has no
    /// `trackerAlarms` array (an expired token or rate limit envelope, for example),
    /// and any dispatcher error from either the read or the update
    #[instrument(skip(self, update), fields(provider = "fitbit", api_call = "update_alarm"))]
    pub async fn update_alarm(
        &mut self,
        user_id: &str,
        tracker_id: &str,
        alarm_id: u64,
        update: &AlarmUpdate,
    ) -> FitbitResult<Option<Value>> {
        let listing_url = self.resource_url(&format!(
            "user/{user_id}/devices/tracker/{tracker_id}/alarms.json"
        ));
        let registered = self.get(&listing_url).await?;
        let Some(alarms) = registered
            .as_json()
            .and_then(|body| body.get("trackerAlarms"))
            .and_then(Value::as_array)
        else {
            let body = match registered {
                ApiResponse::Json(value) => value.to_string(),
                ApiResponse::Text(text) => text,
            };
            return Err(FitbitError::UnexpectedResponse {
                url: listing_url,
                body,
            });
        };

        let Some(stored) = alarms
            .iter()
            .find(|alarm| alarm.get("alarmId").and_then(Value::as_u64) == Some(alarm_id))
        else {
            warn!("Alarm {alarm_id} not found on tracker {tracker_id}, nothing to update");
            return Ok(None);
        };

        let settings = update.merge_onto(stored);
        let url = self.resource_url(&format!(
            "user/{user_id}/devices/tracker/{tracker_id}/alarms/{alarm_id}.json"
        ));
        self.post(&url, Some(&settings)).await.map(Some)
    }

    /// Delete an alarm from a tracker
    ///
    /// # Errors
    ///
    /// Returns `Transport` on network failure
    pub async fn delete_alarm(&mut self, user_id: &str, tracker_id: &str, alarm_id: u64) -> FitbitResult<Response> {
        let url = self.resource_url(&format!(
            "user/{user_id}/devices/tracker/{tracker_id}/alarms/{alarm_id}.json"
        ));
        self.delete(&url, NO_BODY).await
    }
}

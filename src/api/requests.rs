// ABOUTME: Form bodies for write endpoints, serialized with Fitbit's camelCase field names
// ABOUTME: Unset optional fields are omitted from the encoded body rather than sent empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{FitbitError, FitbitResult};
use serde::Serialize;
use serde_json::Value;

/// Body for the Log Activity endpoint
///
/// Either `activity_id` or both `activity_name` and `manual_calories` must be set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogActivity {
    /// Activity type id from the activity catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<u64>,
    /// Custom activity name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,
    /// Calories burned, required with a custom name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_calories: Option<u32>,
    /// Start time, `HH:mm:ss`
    pub start_time: String,
    /// Duration in milliseconds
    pub duration_millis: u64,
    /// Log entry date, `yyyy-MM-dd`
    pub date: String,
    /// Distance, in `distance_unit` or the user's locale unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Distance unit, e.g. `Kilometer`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<String>,
}

impl LogActivity {
    /// Log an activity from the catalog
    #[must_use]
    pub fn from_catalog(
        activity_id: u64,
        start_time: impl Into<String>,
        duration_millis: u64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            activity_id: Some(activity_id),
            activity_name: None,
            manual_calories: None,
            start_time: start_time.into(),
            duration_millis,
            date: date.into(),
            distance: None,
            distance_unit: None,
        }
    }

    /// Log a custom activity
    #[must_use]
    pub fn custom(
        activity_name: impl Into<String>,
        manual_calories: u32,
        start_time: impl Into<String>,
        duration_millis: u64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            activity_id: None,
            activity_name: Some(activity_name.into()),
            manual_calories: Some(manual_calories),
            start_time: start_time.into(),
            duration_millis,
            date: date.into(),
            distance: None,
            distance_unit: None,
        }
    }

    /// Attach a distance
    #[must_use]
    pub fn with_distance(mut self, distance: f64, unit: Option<&str>) -> Self {
        self.distance = Some(distance);
        self.distance_unit = unit.map(str::to_owned);
        self
    }

    pub(crate) fn validate(&self) -> FitbitResult<()> {
        let custom_complete = self.activity_name.is_some() && self.manual_calories.is_some();
        if self.activity_id.is_none() && !custom_complete {
            return Err(FitbitError::invalid_argument(
                "log_activity",
                "expected activity_id, or activity_name and manual_calories",
            ));
        }
        Ok(())
    }
}

/// Body for the Update Activity Goals endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGoals {
    /// Calories burned goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_out: Option<u32>,
    /// Active minutes goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_minutes: Option<u32>,
    /// Floors climbed goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
    /// Distance goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Steps goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
}

/// Body for the Log Body Fat endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyFatLog {
    /// Body fat percentage
    pub fat: f64,
    /// Measurement date
    pub date: String,
    /// Measurement time `HH:mm:ss`; Fitbit uses the last second of the day if absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Body for the Log Weight endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightLog {
    /// Weight in the unit system of the request locale
    pub weight: f64,
    /// Measurement date
    pub date: String,
    /// Measurement time `HH:mm:ss`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BodyFatGoal {
    pub(crate) fat: f64,
}

/// Body for the Update Weight Goal endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightGoal {
    /// Weight goal start date
    pub start_date: String,
    /// Weight at the start date
    pub start_weight: f64,
    /// Target weight; required if the user has no weight goal yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Body for the Add Alarm endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlarm {
    /// Time of day with UTC offset, e.g. `07:15-08:00`
    pub time: String,
    /// Whether the alarm vibrates
    pub enabled: bool,
    /// Whether the alarm repeats
    pub recurring: bool,
    /// Comma separated weekdays, e.g. `MONDAY,TUESDAY`
    pub week_days: String,
}

impl NewAlarm {
    /// Enabled, recurring alarm
    #[must_use]
    pub fn new(time: impl Into<String>, week_days: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            enabled: true,
            recurring: true,
            week_days: week_days.into(),
        }
    }
}

/// Changes for the Update Alarm endpoint; unset fields keep the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmUpdate {
    /// Time of day with UTC offset
    pub time: Option<String>,
    /// Whether the alarm vibrates
    pub enabled: Option<bool>,
    /// Whether the alarm repeats
    pub recurring: Option<bool>,
    /// Comma separated weekdays
    pub week_days: Option<String>,
    /// Minutes between snoozes
    pub snooze_length: Option<u32>,
    /// Maximum snooze count
    pub snooze_count: Option<u32>,
    /// Alarm label
    pub label: Option<String>,
    /// Vibe pattern; Fitbit only knows `DEFAULT`
    pub vibe: Option<String>,
}

/// Fully merged alarm settings as posted to Update Alarm
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    week_days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snooze_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snooze_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vibe: Option<String>,
}

impl AlarmUpdate {
    /// Overlay this update on an alarm entry from the Get Alarms response
    #[must_use]
    pub fn merge_onto(&self, stored: &Value) -> AlarmSettings {
        let stored_week_days = stored.get("weekDays").and_then(|days| match days {
            Value::Array(days) => Some(
                days.iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Value::String(days) => Some(days.clone()),
            _ => None,
        });

        AlarmSettings {
            time: self
                .time
                .clone()
                .or_else(|| stored.get("time").and_then(Value::as_str).map(str::to_owned)),
            enabled: self
                .enabled
                .or_else(|| stored.get("enabled").and_then(Value::as_bool)),
            recurring: self
                .recurring
                .or_else(|| stored.get("recurring").and_then(Value::as_bool)),
            week_days: self.week_days.clone().or(stored_week_days),
            snooze_length: self
                .snooze_length
                .map(u64::from)
                .or_else(|| stored.get("snoozeLength").and_then(Value::as_u64)),
            snooze_count: self
                .snooze_count
                .map(u64::from)
                .or_else(|| stored.get("snoozeCount").and_then(Value::as_u64)),
            label: self.label.clone(),
            vibe: self.vibe.clone(),
        }
    }
}

/// Body for the Log Sleep endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepLog {
    /// Start time, `HH:mm`
    pub start_time: String,
    /// Duration in milliseconds
    pub duration: u64,
    /// Log entry date, `yyyy-MM-dd`
    pub date: String,
}

/// Target of a friend invitation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendInvitation {
    /// Sends the standard invitation email
    Email(String),
    /// Creates the invitation silently
    UserId(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvitationBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    invited_user_email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invited_user_id: Option<&'a str>,
}

impl<'a> From<&'a FriendInvitation> for InvitationBody<'a> {
    fn from(invitation: &'a FriendInvitation) -> Self {
        match invitation {
            FriendInvitation::Email(email) => Self {
                invited_user_email: Some(email.as_str()),
                invited_user_id: None,
            },
            FriendInvitation::UserId(id) => Self {
                invited_user_email: None,
                invited_user_id: Some(id.as_str()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct InvitationResponse {
    pub(crate) accept: bool,
}

// ABOUTME: Endpoint builders for the Fitbit Web API resources, grouped by resource family
// ABOUTME: Each builder maps typed parameters to one URL and one dispatcher call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Endpoints
//!
//! Builders are inherent methods on [`FitbitClient`](crate::FitbitClient),
//! split by resource family. They perform no I/O beyond the single dispatcher
//! call (two for [`update_alarm`](crate::FitbitClient::update_alarm)) and
//! return the dispatcher's result unchanged.
//!
//! `user_id` is the encoded Fitbit user id, or [`CURRENT_USER`](crate::constants::CURRENT_USER)
//! for the user who authorized the token.

mod activity;
mod body;
mod devices;
mod friends;
mod heart_rate;
mod profile;
mod sleep;
mod subscriptions;

pub mod params;
pub mod requests;

pub use params::{
    today, ActivityLogsCursor, ActivityLogsQuery, Collection, DetailLevel, GoalPeriod, GoalType,
    IntradayRange, LogDateQuery, Period, SortOrder, TimeSeriesRange, TimeWindow,
};
pub use requests::{
    ActivityGoals, AlarmSettings, AlarmUpdate, BodyFatLog, FriendInvitation, LogActivity,
    NewAlarm, SleepLog, WeightGoal, WeightLog,
};

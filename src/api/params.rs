// ABOUTME: Tagged parameter types for endpoints with mutually exclusive argument shapes
// ABOUTME: Each type renders its URL path segment; from_parts validates loose optional arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Endpoint parameter types
//!
//! Dates are passed through verbatim: `yyyy-MM-dd` or `today`.

use crate::errors::{FitbitError, FitbitResult};
use chrono::Local;
use std::fmt;
use std::str::FromStr;

/// Today's date in the local timezone, formatted `yyyy-MM-dd`
#[must_use]
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Range for which time series data is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// `1d`
    OneDay,
    /// `7d`
    SevenDays,
    /// `30d`
    ThirtyDays,
    /// `1w`
    OneWeek,
    /// `1m`
    OneMonth,
    /// `3m`
    ThreeMonths,
    /// `6m`
    SixMonths,
    /// `1y`
    OneYear,
    /// `max`
    Max,
}

impl Period {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = FitbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(Self::OneDay),
            "7d" => Ok(Self::SevenDays),
            "30d" => Ok(Self::ThirtyDays),
            "1w" => Ok(Self::OneWeek),
            "1m" => Ok(Self::OneMonth),
            "3m" => Ok(Self::ThreeMonths),
            "6m" => Ok(Self::SixMonths),
            "1y" => Ok(Self::OneYear),
            "max" => Ok(Self::Max),
            other => Err(FitbitError::invalid_argument(
                "period",
                format!("unknown period '{other}'"),
            )),
        }
    }
}

/// Number of data points in an intraday series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailLevel {
    /// `1sec` (heart rate only)
    OneSecond,
    /// `1min`
    OneMinute,
    /// `15min`
    FifteenMinutes,
}

impl DetailLevel {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneSecond => "1sec",
            Self::OneMinute => "1min",
            Self::FifteenMinutes => "15min",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailLevel {
    type Err = FitbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1sec" => Ok(Self::OneSecond),
            "1min" => Ok(Self::OneMinute),
            "15min" => Ok(Self::FifteenMinutes),
            other => Err(FitbitError::invalid_argument(
                "detail_level",
                format!("unknown detail level '{other}'"),
            )),
        }
    }
}

/// Time series selection: a period ending on a date, or an explicit date range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSeriesRange {
    /// `{date}/{period}`
    ByPeriod {
        /// End date of the period
        date: String,
        /// Length of the period
        period: Period,
    },
    /// `{base_date}/{end_date}`
    ByRange {
        /// Range start date
        base_date: String,
        /// Range end date
        end_date: String,
    },
}

impl TimeSeriesRange {
    /// Period ending on `date`
    #[must_use]
    pub fn by_period(date: impl Into<String>, period: Period) -> Self {
        Self::ByPeriod {
            date: date.into(),
            period,
        }
    }

    /// Explicit date range
    #[must_use]
    pub fn by_range(base_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self::ByRange {
            base_date: base_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Pick a shape from loose optional arguments; `date`+`period` wins over a range
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when neither combination is complete
    pub fn from_parts(
        operation: &'static str,
        date: Option<&str>,
        period: Option<Period>,
        base_date: Option<&str>,
        end_date: Option<&str>,
    ) -> FitbitResult<Self> {
        match (date, period, base_date, end_date) {
            (Some(date), Some(period), _, _) => Ok(Self::by_period(date, period)),
            (_, _, Some(base), Some(end)) => Ok(Self::by_range(base, end)),
            _ => Err(FitbitError::invalid_argument(
                operation,
                "expected date and period, or base_date and end_date",
            )),
        }
    }

    /// Path segment placed after `/date/`
    #[must_use]
    pub fn path_segment(&self) -> String {
        match self {
            Self::ByPeriod { date, period } => format!("{date}/{period}"),
            Self::ByRange {
                base_date,
                end_date,
            } => format!("{base_date}/{end_date}"),
        }
    }
}

/// Time-of-day window for intraday queries, `HH:mm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    /// Start of the window
    pub start_time: String,
    /// End of the window
    pub end_time: String,
}

impl TimeWindow {
    /// Window from `start_time` to `end_time`
    #[must_use]
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// Intraday series selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntradayRange {
    /// `{base_date}/{end_date}/{detail}[/time/{start}/{end}]`
    Range {
        /// Range start date
        base_date: String,
        /// Range end date
        end_date: String,
        /// Data point granularity
        detail_level: DetailLevel,
        /// Optional time-of-day window
        window: Option<TimeWindow>,
    },
    /// `{date}/1d/{detail}[/time/{start}/{end}]`
    Day {
        /// The day
        date: String,
        /// Data point granularity
        detail_level: DetailLevel,
        /// Optional time-of-day window
        window: Option<TimeWindow>,
    },
}

impl IntradayRange {
    /// A single day
    #[must_use]
    pub fn day(date: impl Into<String>, detail_level: DetailLevel) -> Self {
        Self::Day {
            date: date.into(),
            detail_level,
            window: None,
        }
    }

    /// A date range
    #[must_use]
    pub fn range(
        base_date: impl Into<String>,
        end_date: impl Into<String>,
        detail_level: DetailLevel,
    ) -> Self {
        Self::Range {
            base_date: base_date.into(),
            end_date: end_date.into(),
            detail_level,
            window: None,
        }
    }

    /// Restrict to a time-of-day window
    #[must_use]
    pub fn with_window(mut self, time_window: TimeWindow) -> Self {
        match &mut self {
            Self::Range { window, .. } | Self::Day { window, .. } => *window = Some(time_window),
        }
        self
    }

    /// Pick a shape from loose optional arguments
    ///
    /// Priority: range with window, range, day with window, day. A window is
    /// only applied when both its ends are present.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `detail_level` is missing or no date shape is complete
    pub fn from_parts(
        operation: &'static str,
        date: Option<&str>,
        base_date: Option<&str>,
        end_date: Option<&str>,
        start_time: Option<&str>,
        end_time: Option<&str>,
        detail_level: Option<DetailLevel>,
    ) -> FitbitResult<Self> {
        let Some(detail_level) = detail_level else {
            return Err(FitbitError::invalid_argument(operation, "detail_level is required"));
        };
        let window = match (start_time, end_time) {
            (Some(start), Some(end)) => Some(TimeWindow::new(start, end)),
            _ => None,
        };

        let range = match (base_date, end_date, date) {
            (Some(base), Some(end), _) => Self::range(base, end, detail_level),
            (_, _, Some(date)) => Self::day(date, detail_level),
            _ => {
                return Err(FitbitError::invalid_argument(
                    operation,
                    "expected date, or base_date and end_date",
                ))
            }
        };

        Ok(match window {
            Some(window) => range.with_window(window),
            None => range,
        })
    }

    /// Path segment placed after `/date/`
    #[must_use]
    pub fn path_segment(&self) -> String {
        let (head, detail_level, window) = match self {
            Self::Range {
                base_date,
                end_date,
                detail_level,
                window,
            } => (format!("{base_date}/{end_date}"), detail_level, window),
            Self::Day {
                date,
                detail_level,
                window,
            } => (format!("{date}/1d"), detail_level, window),
        };

        match window {
            Some(TimeWindow {
                start_time,
                end_time,
            }) => format!("{head}/{detail_level}/time/{start_time}/{end_time}"),
            None => format!("{head}/{detail_level}"),
        }
    }
}

/// Selection for body fat and weight log listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDateQuery {
    /// `{date}/{period}`
    ByPeriod {
        /// End date
        date: String,
        /// Length of the period
        period: Period,
    },
    /// `{date}`
    Day {
        /// The day
        date: String,
    },
    /// `{base_date}/{end_date}`
    ByRange {
        /// Range start date
        base_date: String,
        /// Range end date
        end_date: String,
    },
}

impl LogDateQuery {
    /// Pick a shape from loose optional arguments: date+period, date, then range
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when no combination is complete
    pub fn from_parts(
        operation: &'static str,
        date: Option<&str>,
        period: Option<Period>,
        base_date: Option<&str>,
        end_date: Option<&str>,
    ) -> FitbitResult<Self> {
        match (date, period, base_date, end_date) {
            (Some(date), Some(period), _, _) => Ok(Self::ByPeriod {
                date: date.to_owned(),
                period,
            }),
            (Some(date), None, _, _) => Ok(Self::Day {
                date: date.to_owned(),
            }),
            (None, _, Some(base), Some(end)) => Ok(Self::ByRange {
                base_date: base.to_owned(),
                end_date: end.to_owned(),
            }),
            _ => Err(FitbitError::invalid_argument(
                operation,
                "expected date (with optional period), or base_date and end_date",
            )),
        }
    }

    /// Path segment placed after `/date/`
    #[must_use]
    pub fn path_segment(&self) -> String {
        match self {
            Self::ByPeriod { date, period } => format!("{date}/{period}"),
            Self::Day { date } => date.clone(),
            Self::ByRange {
                base_date,
                end_date,
            } => format!("{base_date}/{end_date}"),
        }
    }
}

/// Sort direction for the activity log list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first
    #[default]
    Asc,
    /// Newest first
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Paging anchor for the activity log list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityLogsCursor {
    /// Entries before this date (`beforeDate`)
    Before(String),
    /// Entries after this date (`afterDate`)
    After(String),
}

impl Default for ActivityLogsCursor {
    fn default() -> Self {
        Self::Before(today())
    }
}

impl ActivityLogsCursor {
    /// `before_date` wins over `after_date`; neither means "before today"
    #[must_use]
    pub fn from_parts(before_date: Option<&str>, after_date: Option<&str>) -> Self {
        match (before_date, after_date) {
            (Some(before), _) => Self::Before(before.to_owned()),
            (None, Some(after)) => Self::After(after.to_owned()),
            (None, None) => Self::default(),
        }
    }

    /// Query parameter name and value
    #[must_use]
    pub fn query_pair(&self) -> (&'static str, &str) {
        match self {
            Self::Before(date) => ("beforeDate", date),
            Self::After(date) => ("afterDate", date),
        }
    }
}

/// Activity log list query, `sort=asc&limit=20&offset=0` by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLogsQuery {
    /// Paging anchor
    pub cursor: ActivityLogsCursor,
    /// Sort direction
    pub sort: SortOrder,
    /// Page size (Fitbit caps this at 100)
    pub limit: u32,
    /// Offset; Fitbit only accepts 0 and expects pagination links instead
    pub offset: u32,
}

impl Default for ActivityLogsQuery {
    fn default() -> Self {
        Self {
            cursor: ActivityLogsCursor::default(),
            sort: SortOrder::Asc,
            limit: 20,
            offset: 0,
        }
    }
}

impl ActivityLogsQuery {
    /// Query anchored at `cursor` with default paging
    #[must_use]
    pub fn new(cursor: ActivityLogsCursor) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }
}

/// Goal period for activity goals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalPeriod {
    /// `daily`
    Daily,
    /// `weekly`
    Weekly,
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        })
    }
}

/// Body goal kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalType {
    /// `fat`
    Fat,
    /// `weight`
    Weight,
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fat => "fat",
            Self::Weight => "weight",
        })
    }
}

/// Subscribable data category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// `activities`
    Activities,
    /// `body`
    Body,
    /// `foods`
    Foods,
    /// `sleep`
    Sleep,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Activities => "activities",
            Self::Body => "body",
            Self::Foods => "foods",
            Self::Sleep => "sleep",
        })
    }
}

impl FromStr for Collection {
    type Err = FitbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activities" => Ok(Self::Activities),
            "body" => Ok(Self::Body),
            "foods" => Ok(Self::Foods),
            "sleep" => Ok(Self::Sleep),
            other => Err(FitbitError::invalid_argument(
                "collection",
                format!("unknown collection '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_series_prefers_period_over_range() {
        let range = TimeSeriesRange::from_parts(
            "activity_time_series",
            Some("2024-01-15"),
            Some(Period::SevenDays),
            Some("2024-01-01"),
            Some("2024-01-07"),
        )
        .unwrap();
        assert_eq!(range.path_segment(), "2024-01-15/7d");

        let range = TimeSeriesRange::from_parts(
            "activity_time_series",
            Some("2024-01-15"),
            None,
            Some("2024-01-01"),
            Some("2024-01-07"),
        )
        .unwrap();
        assert_eq!(range.path_segment(), "2024-01-01/2024-01-07");
    }

    #[test]
    fn test_time_series_rejects_incomplete_arguments() {
        let err = TimeSeriesRange::from_parts("sleep_time_series", None, None, Some("2024-01-01"), None)
            .unwrap_err();
        assert!(matches!(
            err,
            FitbitError::InvalidArgument {
                operation: "sleep_time_series",
                ..
            }
        ));
    }

    #[test]
    fn test_intraday_priority_order() {
        let both = IntradayRange::from_parts(
            "op",
            Some("2024-01-15"),
            Some("2024-01-01"),
            Some("2024-01-02"),
            Some("08:00"),
            Some("09:00"),
            Some(DetailLevel::OneMinute),
        )
        .unwrap();
        assert_eq!(both.path_segment(), "2024-01-01/2024-01-02/1min/time/08:00/09:00");

        let range = IntradayRange::from_parts(
            "op",
            None,
            Some("2024-01-01"),
            Some("2024-01-02"),
            None,
            Some("09:00"),
            Some(DetailLevel::FifteenMinutes),
        )
        .unwrap();
        assert_eq!(range.path_segment(), "2024-01-01/2024-01-02/15min");

        let day_window = IntradayRange::from_parts(
            "op",
            Some("2024-01-15"),
            None,
            None,
            Some("08:00"),
            Some("09:00"),
            Some(DetailLevel::OneSecond),
        )
        .unwrap();
        assert_eq!(day_window.path_segment(), "2024-01-15/1d/1sec/time/08:00/09:00");

        let day = IntradayRange::day("today", DetailLevel::OneMinute);
        assert_eq!(day.path_segment(), "today/1d/1min");
    }

    #[test]
    fn test_intraday_requires_detail_level() {
        let err = IntradayRange::from_parts("op", Some("2024-01-15"), None, None, None, None, None)
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_log_date_query_priority() {
        let query =
            LogDateQuery::from_parts("weight_logs", Some("2024-01-15"), None, Some("a"), Some("b"))
                .unwrap();
        assert_eq!(query.path_segment(), "2024-01-15");

        let query = LogDateQuery::from_parts(
            "weight_logs",
            Some("2024-01-15"),
            Some(Period::OneMonth),
            None,
            None,
        )
        .unwrap();
        assert_eq!(query.path_segment(), "2024-01-15/1m");

        assert!(LogDateQuery::from_parts("weight_logs", None, Some(Period::OneDay), None, None).is_err());
    }

    #[test]
    fn test_activity_logs_cursor_defaults_to_before_today() {
        assert_eq!(
            ActivityLogsCursor::from_parts(None, None),
            ActivityLogsCursor::Before(today())
        );
        assert_eq!(
            ActivityLogsCursor::from_parts(Some("2024-01-01"), Some("2023-01-01")).query_pair(),
            ("beforeDate", "2024-01-01")
        );
        assert_eq!(
            ActivityLogsCursor::from_parts(None, Some("2023-01-01")).query_pair(),
            ("afterDate", "2023-01-01")
        );
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!("30d".parse::<Period>().unwrap(), Period::ThirtyDays);
        assert!("2w".parse::<Period>().is_err());
        assert_eq!(DetailLevel::OneSecond.to_string(), "1sec");
        assert_eq!(GoalPeriod::Weekly.to_string(), "weekly");
        assert_eq!("foods".parse::<Collection>().unwrap(), Collection::Foods);
    }
}

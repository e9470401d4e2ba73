// ABOUTME: fitbit-cli - command-line access to the Fitbit Web API using FITBIT_* credentials
// ABOUTME: Prints JSON responses on stdout and logs on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the URL that starts the authorization-code flow
//! fitbit-cli authorize-url --redirect-uri http://localhost:8080/callback
//!
//! # Rotate the token pair and print it for safekeeping
//! fitbit-cli refresh
//!
//! # Daily activity summary
//! fitbit-cli activity --date 2024-01-15
//!
//! # Steps over the last week
//! fitbit-cli time-series activities/steps --date today --period 7d
//!
//! # Subscriptions scoped to the sleep collection
//! fitbit-cli subscriptions --collection sleep
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitbit_web_api::api::{
    ActivityLogsCursor, ActivityLogsQuery, Collection, DetailLevel, IntradayRange, Period,
    TimeSeriesRange,
};
use fitbit_web_api::constants::{env_config, CURRENT_USER};
use fitbit_web_api::logging::LoggingConfig;
use fitbit_web_api::{authorization_url, ApiResponse, ClientConfig, FitbitClient};
use serde::Serialize;
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitbit-cli",
    about = "Fitbit Web API command-line client",
    long_about = "Query Fitbit resources with the credentials in FITBIT_CLIENT_ID, FITBIT_CLIENT_SECRET, FITBIT_ACCESS_TOKEN and FITBIT_REFRESH_TOKEN."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Encoded user id ("-" for the authorized user)
    #[arg(long, global = true, default_value = CURRENT_USER)]
    user: String,
}

#[derive(Subcommand)]
enum Command {
    /// Print the authorization URL for the authorization-code flow
    AuthorizeUrl {
        /// Fitbit application client id
        #[arg(long, env = env_config::CLIENT_ID)]
        client_id: String,

        /// Redirect URI registered with the Fitbit application
        #[arg(long)]
        redirect_uri: String,

        /// Scopes to request (space separated defaults if omitted)
        #[arg(long, value_delimiter = ',')]
        scope: Vec<String>,

        /// Opaque state echoed back on the redirect
        #[arg(long, default_value = "fitbit-cli")]
        state: String,
    },

    /// Rotate the access/refresh token pair and print it
    Refresh,

    /// User profile
    Profile,

    /// Daily activity summary
    Activity {
        /// Date, yyyy-MM-dd or "today"
        #[arg(long, default_value = "today")]
        date: String,
    },

    /// Time series for a resource path such as activities/steps
    TimeSeries {
        /// Resource path
        resource_path: String,

        /// End date for a period query
        #[arg(long, conflicts_with_all = ["base_date", "end_date"])]
        date: Option<String>,

        /// Period (1d, 7d, 30d, 1w, 1m, 3m, 6m, 1y, max)
        #[arg(long, requires = "date")]
        period: Option<Period>,

        /// Range start date
        #[arg(long, requires = "end_date")]
        base_date: Option<String>,

        /// Range end date
        #[arg(long, requires = "base_date")]
        end_date: Option<String>,
    },

    /// Intraday heart rate for one day
    HeartRate {
        /// Date, yyyy-MM-dd or "today"
        #[arg(long, default_value = "today")]
        date: String,

        /// Detail level (1sec, 1min, 15min)
        #[arg(long, default_value = "1min")]
        detail_level: DetailLevel,
    },

    /// Sleep logs for one day
    Sleep {
        /// Date, yyyy-MM-dd or "today"
        #[arg(long, default_value = "today")]
        date: String,
    },

    /// Activity log entries before or after a date
    Logs {
        /// Entries before this date (default: today)
        #[arg(long, conflicts_with = "after_date")]
        before_date: Option<String>,

        /// Entries after this date
        #[arg(long)]
        after_date: Option<String>,

        /// Page size
        #[arg(long, default_value = "20")]
        limit: u32,
    },

    /// Paired devices
    Devices,

    /// Alarms on a tracker
    Alarms {
        /// Tracker id from the devices listing
        tracker_id: String,
    },

    /// Registered subscriptions
    Subscriptions {
        /// Restrict to one collection (activities, body, foods, sleep)
        #[arg(long)]
        collection: Option<Collection>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().init()?;

    let user = cli.user.as_str();

    match cli.command {
        Command::AuthorizeUrl {
            client_id,
            redirect_uri,
            scope,
            state,
        } => {
            let config = ClientConfig::from_env();
            let scopes: Vec<&str> = scope.iter().map(String::as_str).collect();
            println!(
                "{}",
                authorization_url(&config.authorize_url, &client_id, &redirect_uri, &scopes, &state)?
            );
        }
        Command::Refresh => {
            let mut client = client()?;
            let credential = client.refresh().await?;
            info!("Token pair rotated; store the new refresh token, the old one is now invalid");
            print_json(&json!({
                "access_token": credential.access_token(),
                "refresh_token": credential.refresh_token(),
                "expires_at": credential.expires_at(),
            }))?;
        }
        Command::Profile => print_response(&client()?.profile(user).await?)?,
        Command::Activity { date } => print_response(&client()?.activity(user, &date).await?)?,
        Command::TimeSeries {
            resource_path,
            date,
            period,
            base_date,
            end_date,
        } => {
            let range = TimeSeriesRange::from_parts(
                "time_series",
                date.as_deref(),
                period,
                base_date.as_deref(),
                end_date.as_deref(),
            )?;
            print_response(
                &client()?
                    .activity_time_series(user, &resource_path, &range)
                    .await?,
            )?;
        }
        Command::HeartRate { date, detail_level } => {
            let range = IntradayRange::day(date, detail_level);
            print_response(&client()?.heart_rate_intraday_time_series(user, &range).await?)?;
        }
        Command::Sleep { date } => print_response(&client()?.sleep_logs(user, &date).await?)?,
        Command::Logs {
            before_date,
            after_date,
            limit,
        } => {
            let query = ActivityLogsQuery {
                limit,
                ..ActivityLogsQuery::new(ActivityLogsCursor::from_parts(
                    before_date.as_deref(),
                    after_date.as_deref(),
                ))
            };
            print_response(&client()?.activity_logs_list(user, &query).await?)?;
        }
        Command::Devices => print_response(&client()?.devices(user).await?)?,
        Command::Alarms { tracker_id } => {
            print_response(&client()?.alarms(user, &tracker_id).await?)?;
        }
        Command::Subscriptions { collection } => {
            print_response(&client()?.list_subscriptions(user, collection).await?)?;
        }
    }

    Ok(())
}

fn client() -> Result<FitbitClient> {
    FitbitClient::from_env().context("Failed to load Fitbit credentials")
}

fn print_response(response: &ApiResponse) -> Result<()> {
    match response {
        ApiResponse::Json(value) => print_json(value),
        ApiResponse::Text(text) => {
            println!("{text}");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_authorize_url_takes_client_id_flag() {
        let cli = Cli::try_parse_from([
            "fitbit-cli",
            "authorize-url",
            "--client-id",
            "22ABCD",
            "--redirect-uri",
            "http://localhost:8080/callback",
            "--scope",
            "activity,sleep",
        ])
        .unwrap();

        match cli.command {
            Command::AuthorizeUrl {
                client_id, scope, ..
            } => {
                assert_eq!(client_id, "22ABCD");
                assert_eq!(scope, ["activity", "sleep"]);
            }
            _ => panic!("expected authorize-url"),
        }
    }
}

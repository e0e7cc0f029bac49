mod commands;
mod render;
mod utils;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use eventsphere_core::api::ApiClient;
use eventsphere_core::calendar::{CalendarMonth, SelectionPolicy};
use eventsphere_core::config::EventSphereConfig;

#[derive(Parser)]
#[command(name = "eventsphere")]
#[command(about = "Browse EventSphere events, calendars and the admin profile from the terminal")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease log verbosity (-q, -qq)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    quiet: u8,

    /// Override the events service base URL
    #[arg(long, global = true)]
    events_url: Option<String>,

    /// Override the admin service base URL
    #[arg(long, global = true)]
    admin_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Calendar {
        /// Month to display (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Date to highlight (YYYY-MM-DD)
        #[arg(short, long)]
        select: Option<String>,

        /// Display the month containing the selected date
        #[arg(long)]
        follow: bool,
    },
    /// Ongoing and upcoming events for a date (user dashboard)
    Events {
        /// Date to show (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Fetch from the events service instead of the built-in sample data
        #[arg(long)]
        remote: bool,
    },
    /// Latest ongoing events
    Ongoing {
        /// How many events to request
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Admin profile
    Profile,
    /// Open the dashboard for a role (admin, organiser, user or its route)
    Open {
        role: String,
    },
    /// Keep the selected date's events up to date (organiser dashboard)
    Watch {
        /// Date to follow (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Refresh interval in seconds
        #[arg(short, long)]
        interval: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::logging::init_tracing(cli.verbose, cli.quiet)?;

    let mut config = EventSphereConfig::load().context("Failed to load config")?;
    if let Some(url) = cli.events_url {
        config.events_api_url = url;
    }
    if let Some(url) = cli.admin_url {
        config.admin_api_url = url;
    }
    tracing::debug!(
        events = %config.events_api_url,
        admin = %config.admin_api_url,
        "loaded config"
    );

    match cli.command {
        Commands::Calendar {
            month,
            select,
            follow,
        } => {
            let month = month
                .as_deref()
                .map(str::parse::<CalendarMonth>)
                .transpose()?;
            let select = select.as_deref().map(commands::parse_date).transpose()?;
            let policy = if follow {
                SelectionPolicy::FollowSelection
            } else {
                config.selection_policy
            };
            commands::calendar::run(month, select, policy)
        }
        Commands::Events { date, remote } => {
            let date = date.as_deref().map(commands::parse_date).transpose()?;
            if remote {
                let client = client(&config)?;
                commands::events::run_remote(&client, date, config.selection_policy).await
            } else {
                commands::events::run(date, config.selection_policy)
            }
        }
        Commands::Ongoing { limit } => {
            let limit = limit.unwrap_or(config.ongoing_limit);
            if limit == 0 {
                anyhow::bail!("--limit must be at least 1");
            }
            commands::ongoing::run(&client(&config)?, limit).await
        }
        Commands::Profile => commands::profile::run(&client(&config)?).await,
        Commands::Open { role } => {
            let role = commands::open::parse_role(&role)?;
            let client = client(&config)?;
            commands::open::run(role, client, config).await
        }
        Commands::Watch { date, interval } => {
            let date = date.as_deref().map(commands::parse_date).transpose()?;
            let client = client(&config)?;
            commands::watch::run(client, config, date, interval).await
        }
    }
}

fn client(config: &EventSphereConfig) -> Result<ApiClient> {
    ApiClient::from_config(config).context("Failed to create API client")
}

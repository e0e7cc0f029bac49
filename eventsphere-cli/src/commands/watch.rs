use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use eventsphere_core::api::ApiClient;
use eventsphere_core::config::EventSphereConfig;
use eventsphere_core::dashboard::OrganiserDashboard;
use eventsphere_core::refresh::DateEventsSnapshot;
use owo_colors::OwoColorize;

use super::{today, with_spinner};
use crate::render::Render;

/// Organiser view: print the selected date's events every time the
/// background refresh publishes, until Ctrl-C.
pub async fn run(
    client: ApiClient,
    mut config: EventSphereConfig,
    date: Option<NaiveDate>,
    interval: Option<u64>,
) -> Result<()> {
    if let Some(secs) = interval {
        if secs == 0 {
            anyhow::bail!("--interval must be at least 1 second");
        }
        config.refresh_interval_secs = secs;
    }

    let today = today();
    let dashboard = with_spinner(
        "Connecting to EventSphere",
        OrganiserDashboard::connect(client, today, date.unwrap_or(today), &config),
    )
    .await?;

    println!("{}", dashboard.calendar().render());
    println!();
    print_ongoing(&dashboard, config.ongoing_limit);

    let mut rx = dashboard.subscribe();
    print_snapshot(&rx.borrow_and_update());

    println!(
        "{}",
        format!(
            "Refreshing every {}, press Ctrl-C to stop",
            format_interval(config.refresh_interval())
        )
        .dimmed()
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted, stopping refresh");
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = rx.borrow_and_update().clone();
                if !snapshot.loading {
                    print_snapshot(&snapshot);
                }
            }
        }
    }

    dashboard.close();
    Ok(())
}

fn print_ongoing(dashboard: &OrganiserDashboard<ApiClient>, limit: u32) {
    println!("{}", format!("Ongoing Events (Latest {limit})").bold().underline());

    if dashboard.ongoing().is_empty() {
        println!("   {}", "No active events found.".dimmed());
    }
    for event in dashboard.ongoing() {
        println!("   {}", event.render());
    }
    println!();
}

fn print_snapshot(snapshot: &DateEventsSnapshot) {
    let header = format!("Events on {}", snapshot.date.format("%Y-%m-%d"));
    println!("{}", header.bold());

    if snapshot.loading && snapshot.events.is_empty() {
        println!("   {}", "Loading...".dimmed());
        return;
    }
    if snapshot.events.is_empty() {
        println!("   {}", "No events for this date.".dimmed().italic());
        return;
    }
    for event in &snapshot.events {
        println!("   {}", event.render());
    }
}

fn format_interval(interval: Duration) -> String {
    match interval.as_secs() {
        1 => "second".to_string(),
        secs if secs % 60 == 0 && secs >= 60 => format!("{} min", secs / 60),
        secs => format!("{secs}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_read_naturally() {
        assert_eq!(format_interval(Duration::from_secs(15)), "15s");
        assert_eq!(format_interval(Duration::from_secs(120)), "2 min");
        assert_eq!(format_interval(Duration::from_secs(1)), "second");
    }
}

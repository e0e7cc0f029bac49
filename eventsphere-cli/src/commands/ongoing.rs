use anyhow::Result;
use eventsphere_core::api::ApiClient;
use owo_colors::OwoColorize;

use super::with_spinner;

pub async fn run(client: &ApiClient, limit: u32) -> Result<()> {
    let events =
        with_spinner("Fetching ongoing events", client.ongoing_events_or_default(limit)).await;

    println!("{}", format!("Ongoing Events (Latest {limit})").bold().underline());

    if events.is_empty() {
        println!("   {}", "No active events found.".dimmed());
        return Ok(());
    }

    for event in &events {
        println!(
            "   {} {}  {}",
            "▌".green(),
            event.title,
            event.status_label().dimmed().italic()
        );
    }

    Ok(())
}

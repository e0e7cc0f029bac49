use anyhow::Result;
use chrono::NaiveDate;
use eventsphere_core::api::ApiClient;
use eventsphere_core::calendar::{CalendarState, SelectionPolicy};
use eventsphere_core::dashboard::UserDashboard;
use eventsphere_core::event::{DayEvents, events_on, sample_events};
use owo_colors::OwoColorize;

use super::{with_spinner, event_days, print_outside_month_note, today};
use crate::render::{Render, render_calendar};

/// The user dashboard over the built-in mock events.
pub fn run(date: Option<NaiveDate>, policy: SelectionPolicy) -> Result<()> {
    let mut dashboard = UserDashboard::with_sample_events(today(), policy);
    if let Some(date) = date {
        dashboard.select_date(date);
    }

    print_day(dashboard.calendar(), &event_days(&sample_events()), &dashboard.day_events());
    Ok(())
}

/// Same view, fed by the by-date endpoint.
pub async fn run_remote(
    client: &ApiClient,
    date: Option<NaiveDate>,
    policy: SelectionPolicy,
) -> Result<()> {
    let today = today();
    let date = date.unwrap_or(today);
    let state = CalendarState::new(today, date, policy);

    let events = with_spinner(
        format!("Fetching events for {date}"),
        client.events_by_date_or_default(date),
    )
    .await;

    print_day(&state, &event_days(&events), &events_on(&events, date));
    Ok(())
}

fn print_day(
    state: &CalendarState,
    marked: &std::collections::HashSet<NaiveDate>,
    day: &DayEvents,
) {
    println!("{}", render_calendar(state, marked));
    print_outside_month_note(state);
    println!();
    println!("{}", day.render());
    println!();
    println!("{}", day.summary().dimmed());
}

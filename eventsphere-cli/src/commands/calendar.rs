use anyhow::Result;
use chrono::NaiveDate;
use eventsphere_core::calendar::{CalendarMonth, CalendarState, SelectionPolicy};
use eventsphere_core::event::sample_events;
use owo_colors::OwoColorize;

use super::{event_days, print_outside_month_note, today};
use crate::render::render_calendar;

pub fn run(
    month: Option<CalendarMonth>,
    select: Option<NaiveDate>,
    policy: SelectionPolicy,
) -> Result<()> {
    let today = today();
    let mut state = CalendarState::new(today, select.unwrap_or(today), policy);

    if let Some(month) = month {
        state.show_month(month);
    }

    let marked = event_days(&sample_events());
    println!("{}", render_calendar(&state, &marked));
    println!();
    println!(
        "{} {}",
        "Selected:".dimmed(),
        state.selected().format("%Y-%m-%d")
    );
    print_outside_month_note(&state);

    Ok(())
}

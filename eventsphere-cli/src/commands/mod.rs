pub mod calendar;
pub mod events;
pub mod ongoing;
pub mod open;
pub mod profile;
pub mod watch;

use std::collections::HashSet;

use anyhow::Result;
use chrono::NaiveDate;
use eventsphere_core::calendar::CalendarState;
use eventsphere_core::event::EventRecord;
use owo_colors::OwoColorize;

pub use crate::utils::tui::with_spinner;

/// The only place the CLI reads the clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

/// Dates that have at least one event, for calendar markers.
pub fn event_days(events: &[EventRecord]) -> HashSet<NaiveDate> {
    events.iter().map(|e| e.date).collect()
}

/// Note printed under a grid that does not show the selected date.
pub fn outside_month_note(state: &CalendarState) -> Option<String> {
    if state.grid().contains(state.selected()) {
        return None;
    }
    Some(format!(
        "(selected date {} is outside {})",
        state.selected().format("%Y-%m-%d"),
        state.month()
    ))
}

pub fn print_outside_month_note(state: &CalendarState) {
    if let Some(note) = outside_month_note(state) {
        println!("{}", note.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use eventsphere_core::calendar::SelectionPolicy;

    #[test]
    fn notes_selection_outside_displayed_month() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let selected = NaiveDate::from_ymd_opt(2024, 5, 18).unwrap();

        let detached = CalendarState::new(today, selected, SelectionPolicy::Detached);
        assert_eq!(
            outside_month_note(&detached).as_deref(),
            Some("(selected date 2024-05-18 is outside October 2026)")
        );

        let following = CalendarState::new(today, selected, SelectionPolicy::FollowSelection);
        assert_eq!(outside_month_note(&following), None);
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_date("2024-05-18").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 18).unwrap()
        );
        assert!(parse_date("18/05/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }
}

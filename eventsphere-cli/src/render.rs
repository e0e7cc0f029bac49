//! TUI rendering traits for EventSphere types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to eventsphere-core types using owo_colors.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use eventsphere_core::calendar::{CalendarState, DayCell, WEEKDAY_LABELS};
use eventsphere_core::dashboard::AdminDashboard;
use eventsphere_core::event::{DayEvents, EventRecord, EventStatus};
use eventsphere_core::profile::AdminProfile;
use owo_colors::OwoColorize;

/// Width of one day column, including the separating space.
const CELL_WIDTH: usize = 5;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let tags = self.tags().collect::<Vec<_>>().join(" · ");
        let mut line = format!("{} {}", "▌".green(), self.title.bold());

        if !tags.is_empty() {
            line.push_str(&format!("  {}", tags.dimmed()));
        }
        if self.status == EventStatus::Ongoing {
            line.push_str(&format!("  {}", self.status_label().to_uppercase().italic()));
        }
        line
    }
}

impl Render for DayEvents {
    fn render(&self) -> String {
        let mut lines = vec![
            self.date.format("%A %-d %B %Y").to_string().bold().to_string(),
            String::new(),
        ];

        render_section("Ongoing Events", &self.ongoing, "No ongoing events for this date.", &mut lines);
        lines.push(String::new());
        render_section("Upcoming Events", &self.upcoming, "No upcoming events for this date.", &mut lines);

        lines.join("\n")
    }
}

fn render_section(title: &str, events: &[EventRecord], empty: &str, lines: &mut Vec<String>) {
    lines.push(title.underline().to_string());

    if events.is_empty() {
        lines.push(format!("   {}", empty.dimmed().italic()));
        return;
    }
    for event in events {
        lines.push(format!("   {}", event.render()));
    }
}

impl Render for AdminProfile {
    fn render(&self) -> String {
        let photo = self.photo_url().unwrap_or("(no photo)");
        [
            format!("{} {}", "Name:".dimmed(), self.name()),
            format!("{} {}", "Email:".dimmed(), self.email()),
            format!("{} {}", "Phone No:".dimmed(), self.phone()),
            format!("{} {}", "Username:".dimmed(), self.username()),
            format!("{} {}", "Photo:".dimmed(), photo),
        ]
        .join("\n")
    }
}

impl Render for AdminDashboard {
    fn render(&self) -> String {
        let tabs = self.tabs().join(" | ");
        let mail = self
            .mail_audiences()
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join("   ");

        format!(
            "{}\n{}\n\n{}\n\n{}",
            "EventSphere Admin".bold(),
            tabs.dimmed(),
            self.profile.render(),
            mail.green()
        )
    }
}

impl Render for CalendarState {
    fn render(&self) -> String {
        render_calendar(self, &HashSet::new())
    }
}

/// Month grid with the selection highlighted, today underlined and days in
/// `marked` flagged with a dot.
pub fn render_calendar(state: &CalendarState, marked: &HashSet<NaiveDate>) -> String {
    let grid = state.grid();
    let width = CELL_WIDTH * WEEKDAY_LABELS.len();

    let mut lines = vec![
        format!("{:^width$}", grid.month().label()).bold().to_string(),
        WEEKDAY_LABELS
            .iter()
            .map(|d| format!("{d:>4} "))
            .collect::<String>()
            .dimmed()
            .to_string(),
    ];

    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| render_cell(state, cell, marked))
            .collect();
        lines.push(row.trim_end().to_string());
    }

    lines.join("\n")
}

fn render_cell(state: &CalendarState, cell: &DayCell, marked: &HashSet<NaiveDate>) -> String {
    let DayCell::Day(date) = cell else {
        return " ".repeat(CELL_WIDTH);
    };

    let marker = if marked.contains(date) { "•" } else { " " };
    // Pad before coloring so escape codes do not break alignment
    let day = format!("{:>3}", date.day());

    if state.is_selected(*date) {
        format!(" {}{}", day.black().on_green().bold(), marker)
    } else if state.is_today(*date) {
        format!(" {}{}", day.underline(), marker)
    } else {
        format!(" {day}{marker}")
    }
}

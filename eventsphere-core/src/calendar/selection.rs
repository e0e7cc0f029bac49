//! Displayed month plus the selected date, as held by a dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CalendarGrid, CalendarMonth};
use crate::error::{EventSphereError, EventSphereResult};

/// How selecting a date interacts with the displayed month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// The selection may lie outside the displayed month.
    #[default]
    Detached,
    /// Selecting a date outside the displayed month navigates to it.
    FollowSelection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    today: NaiveDate,
    month: CalendarMonth,
    selected: NaiveDate,
    policy: SelectionPolicy,
}

impl CalendarState {
    /// `today` is the reference date used for the initial month and the
    /// "today" marker; callers read the clock, this type never does.
    pub fn new(today: NaiveDate, selected: NaiveDate, policy: SelectionPolicy) -> Self {
        let month = match policy {
            SelectionPolicy::Detached => CalendarMonth::containing(today),
            SelectionPolicy::FollowSelection => CalendarMonth::containing(selected),
        };

        CalendarState {
            today,
            month,
            selected,
            policy,
        }
    }

    /// Selection defaults to today.
    pub fn starting_today(today: NaiveDate, policy: SelectionPolicy) -> Self {
        Self::new(today, today, policy)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::build(self.month)
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == date
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        self.today == date
    }

    /// Record a new selection. Any date is accepted.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = date;

        if self.policy == SelectionPolicy::FollowSelection && !self.month.contains(date) {
            self.month = CalendarMonth::containing(date);
        }
    }

    /// Select a day number of the displayed month, as a click on the grid does.
    pub fn select_day(&mut self, day: u32) -> EventSphereResult<NaiveDate> {
        let date = self.month.day(day).ok_or_else(|| {
            EventSphereError::InvalidArgument(format!("{} has no day {day}", self.month))
        })?;
        self.select_date(date);
        Ok(date)
    }

    pub fn next_month(&mut self) -> EventSphereResult<()> {
        self.shift_month(1)
    }

    pub fn previous_month(&mut self) -> EventSphereResult<()> {
        self.shift_month(-1)
    }

    pub fn shift_month(&mut self, delta: i32) -> EventSphereResult<()> {
        self.month = self.month.advance(delta)?;
        Ok(())
    }

    /// Display `month` without touching the selection.
    pub fn show_month(&mut self, month: CalendarMonth) {
        self.month = month;
    }

    pub fn jump_to_today(&mut self) {
        self.month = CalendarMonth::containing(self.today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn detached_selection_keeps_displayed_month() {
        let mut state = CalendarState::new(
            date(2026, 10, 16),
            date(2024, 5, 18),
            SelectionPolicy::Detached,
        );
        assert_eq!(state.month(), CalendarMonth::new(2026, 9).unwrap());
        assert!(!state.grid().contains(state.selected()));

        state.select_date(date(2023, 1, 2));
        assert_eq!(state.selected(), date(2023, 1, 2));
        assert_eq!(state.month(), CalendarMonth::new(2026, 9).unwrap());
    }

    #[test]
    fn follow_selection_navigates() {
        let mut state = CalendarState::new(
            date(2026, 10, 16),
            date(2024, 5, 18),
            SelectionPolicy::FollowSelection,
        );
        assert_eq!(state.month(), CalendarMonth::new(2024, 4).unwrap());

        state.select_date(date(2024, 7, 4));
        assert_eq!(state.month(), CalendarMonth::new(2024, 6).unwrap());
        assert!(state.grid().contains(state.selected()));
    }

    #[test]
    fn select_day_within_displayed_month() {
        let mut state =
            CalendarState::starting_today(date(2024, 2, 10), SelectionPolicy::Detached);

        assert_eq!(state.select_day(29).unwrap(), date(2024, 2, 29));
        assert!(state.is_selected(date(2024, 2, 29)));
        assert!(matches!(
            state.select_day(30),
            Err(EventSphereError::InvalidArgument(_))
        ));
        assert!(state.select_day(0).is_err());
        assert_eq!(state.selected(), date(2024, 2, 29));
    }

    #[test]
    fn navigation_does_not_touch_selection() {
        let mut state =
            CalendarState::starting_today(date(2024, 12, 31), SelectionPolicy::Detached);

        state.next_month().unwrap();
        assert_eq!(state.month(), CalendarMonth::new(2025, 0).unwrap());
        state.previous_month().unwrap();
        state.previous_month().unwrap();
        assert_eq!(state.month(), CalendarMonth::new(2024, 10).unwrap());
        assert_eq!(state.selected(), date(2024, 12, 31));

        state.show_month(CalendarMonth::new(1999, 0).unwrap());
        assert_eq!(state.grid().month().label(), "January 1999");

        state.jump_to_today();
        assert_eq!(state.month(), CalendarMonth::new(2024, 11).unwrap());
        assert!(state.is_today(date(2024, 12, 31)));
    }
}

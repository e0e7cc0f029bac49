//! Week-aligned day grid for a single month.

use chrono::NaiveDate;

use super::{CalendarMonth, DAYS_PER_WEEK};
use crate::error::EventSphereResult;

/// One slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCell {
    /// Padding before the 1st or after the last day of the month.
    Empty,
    Day(NaiveDate),
}

impl DayCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Empty => None,
            DayCell::Day(date) => Some(*date),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DayCell::Empty)
    }
}

/// Rows of seven cells covering every day of `month`.
///
/// The leading padding puts day 1 under its weekday column (Sunday first);
/// trailing padding completes the last week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    month: CalendarMonth,
    cells: Vec<DayCell>,
}

impl CalendarGrid {
    pub fn build(month: CalendarMonth) -> Self {
        let leading = month.first_weekday() as usize;
        let day_count = month.day_count() as usize;
        let total = (leading + day_count).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

        let mut cells = Vec::with_capacity(total);
        cells.resize(leading, DayCell::Empty);
        cells.extend(month.first_day().iter_days().take(day_count).map(DayCell::Day));
        cells.resize(total, DayCell::Empty);

        CalendarGrid { month, cells }
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The real dates, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells.iter().filter_map(DayCell::date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.month.contains(date)
    }
}

/// Build the grid for a year and zero-based month index.
pub fn build_grid(year: i32, month0: u32) -> EventSphereResult<CalendarGrid> {
    Ok(CalendarGrid::build(CalendarMonth::new(year, month0)?))
}

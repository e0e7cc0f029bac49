//! Month arithmetic for the dashboard calendars.
//!
//! Months are addressed by year and a zero-based month index (0 = January).
//! Every dashboard builds its calendar from the same [`CalendarGrid`], so the
//! padding and leap-year rules live here and nowhere else.

mod grid;
pub mod selection;

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::{EventSphereError, EventSphereResult};

pub use grid::{CalendarGrid, DayCell, build_grid};
pub use selection::{CalendarState, SelectionPolicy};

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const DAYS_PER_WEEK: usize = 7;

/// A displayed month: a year and a zero-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    year: i32,
    month0: u32,
}

impl CalendarMonth {
    /// Validate and build a month. The year must be representable as a calendar date.
    pub fn new(year: i32, month0: u32) -> EventSphereResult<Self> {
        if month0 > 11 {
            return Err(EventSphereError::InvalidArgument(format!(
                "month index {month0} is out of range (expected 0-11)"
            )));
        }
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(EventSphereError::InvalidArgument(format!(
                "year {year} is outside the supported calendar range"
            )));
        }
        Ok(CalendarMonth { year, month0 })
    }

    /// The month a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        CalendarMonth {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index.
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-based month number, as written in ISO dates.
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn day_count(&self) -> u32 {
        match self.month0 {
            1 if is_leap_year(self.year) => 29,
            1 => 28,
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // Range-checked in `new` / derived from a valid date in `containing`.
        NaiveDate::from_ymd_opt(self.year, self.month(), 1).unwrap_or(NaiveDate::MIN)
    }

    /// Weekday of the 1st, 0 = Sunday.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// The date for a day number of this month, if the day exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), day)
    }

    /// Move by `delta` months in either direction, rolling the year over.
    pub fn advance(self, delta: i32) -> EventSphereResult<Self> {
        let total = i64::from(self.year) * 12 + i64::from(self.month0) + i64::from(delta);
        let year = i32::try_from(total.div_euclid(12)).map_err(|_| {
            EventSphereError::InvalidArgument(format!(
                "moving {delta} months from {self} leaves the supported calendar range"
            ))
        })?;
        // rem_euclid keeps the index in 0..12 for negative totals
        CalendarMonth::new(year, total.rem_euclid(12) as u32)
    }

    /// Human label such as "May 2024".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses `YYYY-MM` (one-based month, as on the command line).
impl FromStr for CalendarMonth {
    type Err = EventSphereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || EventSphereError::InvalidArgument(format!("Invalid month '{s}'. Expected YYYY-MM"));

        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if month == 0 {
            return Err(invalid());
        }
        CalendarMonth::new(year, month - 1)
    }
}

/// Gregorian leap-year rule: every fourth year, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month given a zero-based month index.
pub fn days_in_month(year: i32, month0: u32) -> EventSphereResult<u32> {
    Ok(CalendarMonth::new(year, month0)?.day_count())
}

/// Weekday of the first of the month, 0 = Sunday.
pub fn first_weekday(year: i32, month0: u32) -> EventSphereResult<u32> {
    Ok(CalendarMonth::new(year, month0)?.first_weekday())
}

/// Add `delta` months to `month`.
pub fn advance_month(month: CalendarMonth, delta: i32) -> EventSphereResult<CalendarMonth> {
    month.advance(delta)
}

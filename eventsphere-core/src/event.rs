//! Event records as served by the events API, and filtering them by date.
//!
//! Dates are compared as `NaiveDate` values, never as strings: the wire
//! format `YYYY-MM-DD` is parsed once on deserialization.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label shown next to an ongoing event when the backend sends none.
pub const DEFAULT_STATUS_TEXT: &str = "Active Now";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: u64,
    pub title: String,
    /// Comma-separated tags such as "Paid, Technology".
    #[serde(rename = "type", default)]
    pub category: String,
    pub date: NaiveDate,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
}

impl EventRecord {
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.category
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    pub fn status_label(&self) -> &str {
        self.status_text.as_deref().unwrap_or(DEFAULT_STATUS_TEXT)
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Status tag of an event. Unknown tags are kept rather than rejected so a
/// single odd record does not fail a whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    Ongoing,
    Upcoming,
    Other(String),
}

impl EventStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Ongoing => "ongoing",
            EventStatus::Upcoming => "upcoming",
            EventStatus::Other(tag) => tag,
        }
    }
}

impl From<String> for EventStatus {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ongoing" => EventStatus::Ongoing,
            "upcoming" => EventStatus::Upcoming,
            _ => EventStatus::Other(tag),
        }
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events on one date, split by status. Relative order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEvents {
    pub date: NaiveDate,
    pub ongoing: Vec<EventRecord>,
    pub upcoming: Vec<EventRecord>,
    /// Same-day events whose status is neither ongoing nor upcoming.
    pub other: Vec<EventRecord>,
}

impl DayEvents {
    pub fn empty(date: NaiveDate) -> Self {
        DayEvents {
            date,
            ongoing: Vec::new(),
            upcoming: Vec::new(),
            other: Vec::new(),
        }
    }

    /// Every event on the date, whatever its status.
    pub fn total(&self) -> usize {
        self.ongoing.len() + self.upcoming.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// "N events found" line shown under the calendar.
    pub fn summary(&self) -> String {
        let total = self.total();
        format!("{total} {} found", if total == 1 { "event" } else { "events" })
    }
}

/// Single pass over `events`, keeping those dated `date`.
pub fn events_on<'a, I>(events: I, date: NaiveDate) -> DayEvents
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut day = DayEvents::empty(date);

    for event in events.into_iter().filter(|e| e.is_on(date)) {
        let bucket = match event.status {
            EventStatus::Ongoing => &mut day.ongoing,
            EventStatus::Upcoming => &mut day.upcoming,
            EventStatus::Other(_) => &mut day.other,
        };
        bucket.push(event.clone());
    }

    day
}

fn sample(id: u64, title: &str, category: &str, date: (i32, u32, u32), status: EventStatus) -> EventRecord {
    EventRecord {
        id,
        title: title.to_string(),
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        status,
        status_text: None,
    }
}

/// Mock events used by the user dashboard until it is wired to the API.
pub fn sample_events() -> Vec<EventRecord> {
    vec![
        sample(1, "Tech Innovators Conference", "Paid, Technology", (2024, 5, 18), EventStatus::Ongoing),
        sample(2, "Global Culture Fest - Day 1", "Free, Cultural", (2024, 5, 18), EventStatus::Ongoing),
        sample(3, "Summer Music Jam", "Paid, Cultural", (2024, 5, 20), EventStatus::Upcoming),
        sample(4, "Sci-Fi VR Experience", "Free, Abstract", (2024, 5, 22), EventStatus::Upcoming),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn titles(events: &[EventRecord]) -> Vec<&str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn conference_day_has_only_ongoing_events() {
        let events = sample_events();
        let day = events_on(&events, date(2024, 5, 18));

        assert_eq!(
            titles(&day.ongoing),
            ["Tech Innovators Conference", "Global Culture Fest - Day 1"]
        );
        assert!(day.upcoming.is_empty());
        assert_eq!(day.total(), 2);
        assert_eq!(day.summary(), "2 events found");
    }

    #[test]
    fn single_ongoing_and_upcoming_split() {
        let events = vec![
            sample(1, "A", "", (2024, 5, 18), EventStatus::Ongoing),
            sample(2, "B", "", (2024, 5, 20), EventStatus::Upcoming),
        ];

        let first = events_on(&events, date(2024, 5, 18));
        assert_eq!((first.ongoing.len(), first.upcoming.len()), (1, 0));

        let second = events_on(&events, date(2024, 5, 20));
        assert_eq!((second.ongoing.len(), second.upcoming.len()), (0, 1));
    }

    #[test]
    fn date_without_events_is_empty() {
        let day = events_on(&sample_events(), date(2024, 5, 19));
        assert!(day.is_empty());
        assert_eq!(day, DayEvents::empty(date(2024, 5, 19)));
        assert_eq!(day.summary(), "0 events found");
    }

    #[test]
    fn unknown_status_is_counted_but_not_listed() {
        let events = vec![
            sample(1, "Cancelled gig", "", (2024, 6, 1), EventStatus::Other("cancelled".into())),
            sample(2, "Open day", "", (2024, 6, 1), EventStatus::Upcoming),
        ];
        let day = events_on(&events, date(2024, 6, 1));
        assert!(day.ongoing.is_empty());
        assert_eq!(titles(&day.upcoming), ["Open day"]);
        assert_eq!(day.total(), 2);
    }

    #[test]
    fn decodes_wire_record() {
        let json = r#"{
            "id": 7,
            "title": "Hackathon",
            "type": "Free, Technology",
            "date": "2024-05-18",
            "status": "ongoing",
            "statusText": "Live"
        }"#;
        let event: EventRecord = serde_json::from_str(json).unwrap();

        assert_eq!(event.date, date(2024, 5, 18));
        assert_eq!(event.status, EventStatus::Ongoing);
        assert_eq!(event.tags().collect::<Vec<_>>(), ["Free", "Technology"]);
        assert_eq!(event.status_label(), "Live");
    }

    #[test]
    fn unknown_status_and_missing_optionals_decode() {
        let json = r#"{"id": 1, "title": "x", "date": "2024-01-02", "status": "postponed"}"#;
        let event: EventRecord = serde_json::from_str(json).unwrap();

        assert_eq!(event.status, EventStatus::Other("postponed".into()));
        assert_eq!(event.category, "");
        assert_eq!(event.status_label(), DEFAULT_STATUS_TEXT);

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["status"], "postponed");
        assert_eq!(back["type"], "");
    }

    #[test]
    fn malformed_date_is_rejected() {
        let json = r#"{"id": 1, "title": "x", "date": "18/05/2024", "status": "ongoing"}"#;
        assert!(serde_json::from_str::<EventRecord>(json).is_err());
    }
}

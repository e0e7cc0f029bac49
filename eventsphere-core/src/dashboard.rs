//! State behind the three role dashboards.
//!
//! Each dashboard owns its own [`CalendarState`] and derives what it shows
//! from it. The reference date is always passed in by the caller.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::{ApiClient, EventSource};
use crate::calendar::{CalendarState, SelectionPolicy};
use crate::config::EventSphereConfig;
use crate::error::{EventSphereError, EventSphereResult};
use crate::event::{DayEvents, EventRecord, events_on, sample_events};
use crate::profile::AdminProfile;
use crate::refresh::{DateEventsRefresher, DateEventsSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Organiser,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Organiser, Role::User];

    pub fn route(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Organiser => "/organiser",
            Role::User => "/user",
        }
    }

    pub fn from_route(path: &str) -> Option<Role> {
        Self::ALL.into_iter().find(|role| role.route() == path)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Organiser => "organiser",
            Role::User => "user",
        };
        f.write_str(name)
    }
}

impl FromStr for Role {
    type Err = EventSphereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "organiser" | "organizer" => Ok(Role::Organiser),
            "user" => Ok(Role::User),
            other => Err(EventSphereError::InvalidArgument(format!(
                "Unknown role '{other}'. Expected admin, organiser or user"
            ))),
        }
    }
}

// ============================================================================
// User
// ============================================================================

/// Initial selection on the user dashboard, matching its mock data.
pub fn user_initial_selection() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 18).unwrap_or_default()
}

/// Events for the selected date, split into ongoing and upcoming.
#[derive(Debug, Clone)]
pub struct UserDashboard {
    calendar: CalendarState,
    events: Vec<EventRecord>,
}

impl UserDashboard {
    pub fn new(today: NaiveDate, events: Vec<EventRecord>, policy: SelectionPolicy) -> Self {
        UserDashboard {
            calendar: CalendarState::new(today, user_initial_selection(), policy),
            events,
        }
    }

    /// The dashboard over the built-in mock events.
    pub fn with_sample_events(today: NaiveDate, policy: SelectionPolicy) -> Self {
        Self::new(today, sample_events(), policy)
    }

    pub fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut CalendarState {
        &mut self.calendar
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.calendar.select_date(date);
    }

    pub fn day_events(&self) -> DayEvents {
        events_on(&self.events, self.calendar.selected())
    }

    pub fn summary(&self) -> String {
        self.day_events().summary()
    }
}

// ============================================================================
// Organiser
// ============================================================================

/// Latest ongoing events plus a live list for the selected date.
pub struct OrganiserDashboard<S> {
    calendar: CalendarState,
    ongoing: Vec<EventRecord>,
    refresher: DateEventsRefresher<S>,
}

impl<S: EventSource> OrganiserDashboard<S> {
    /// Starts the refresher on `selected`, so this must run inside a tokio
    /// runtime. Fails when the configured interval is zero.
    pub fn start(
        source: Arc<S>,
        today: NaiveDate,
        selected: NaiveDate,
        ongoing: Vec<EventRecord>,
        config: &EventSphereConfig,
    ) -> EventSphereResult<Self> {
        let calendar = CalendarState::new(today, selected, config.selection_policy);
        let refresher =
            DateEventsRefresher::spawn(source, calendar.selected(), config.refresh_interval())?;

        Ok(OrganiserDashboard {
            calendar,
            ongoing,
            refresher,
        })
    }

    pub fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    pub fn ongoing(&self) -> &[EventRecord] {
        &self.ongoing
    }

    pub fn set_ongoing(&mut self, events: Vec<EventRecord>) {
        self.ongoing = events;
    }

    /// Selecting a date re-arms the refresher for it.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.calendar.select_date(date);
        self.refresher.reselect(date);
    }

    pub fn select_day(&mut self, day: u32) -> EventSphereResult<NaiveDate> {
        let date = self.calendar.select_day(day)?;
        self.refresher.reselect(date);
        Ok(date)
    }

    pub fn next_month(&mut self) -> EventSphereResult<()> {
        self.calendar.next_month()
    }

    pub fn previous_month(&mut self) -> EventSphereResult<()> {
        self.calendar.previous_month()
    }

    pub fn date_events(&self) -> DateEventsSnapshot {
        self.refresher.snapshot()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<DateEventsSnapshot> {
        self.refresher.subscribe()
    }

    /// Stop background refreshes; also happens on drop.
    pub fn close(&self) {
        self.refresher.stop();
    }
}

impl OrganiserDashboard<ApiClient> {
    /// Fetch the ongoing list and start refreshing `selected`, which is
    /// usually `today`.
    pub async fn connect(
        client: ApiClient,
        today: NaiveDate,
        selected: NaiveDate,
        config: &EventSphereConfig,
    ) -> EventSphereResult<Self> {
        let ongoing = client.ongoing_events_or_default(config.ongoing_limit).await;
        Self::start(Arc::new(client), today, selected, ongoing, config)
    }
}

// ============================================================================
// Admin
// ============================================================================

pub const ADMIN_TABS: [&str; 5] = ["Users", "Venues", "Events", "Programmes", "Organisers"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailAudience {
    All,
    Users,
    Organisers,
}

impl MailAudience {
    pub const ALL: [MailAudience; 3] = [MailAudience::All, MailAudience::Users, MailAudience::Organisers];

    pub fn label(&self) -> &'static str {
        match self {
            MailAudience::All => "Mail to All",
            MailAudience::Users => "Mail to Users",
            MailAudience::Organisers => "Mail to Organisers",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminDashboard {
    pub profile: AdminProfile,
}

impl AdminDashboard {
    pub async fn load(client: &ApiClient) -> Self {
        AdminDashboard {
            profile: client.admin_profile_or_default().await,
        }
    }

    pub fn tabs(&self) -> &'static [&'static str] {
        &ADMIN_TABS
    }

    pub fn mail_audiences(&self) -> &'static [MailAudience] {
        &MailAudience::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StaticEvents;
    use std::time::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn roles_map_to_routes() {
        assert_eq!(Role::from_route("/organiser"), Some(Role::Organiser));
        assert_eq!(Role::from_route("/"), None);
        assert_eq!("Organizer".parse::<Role>().unwrap(), Role::Organiser);
        assert!("guest".parse::<Role>().is_err());
    }

    #[test]
    fn user_dashboard_starts_on_mock_date() {
        let dashboard =
            UserDashboard::with_sample_events(date(2026, 10, 16), SelectionPolicy::Detached);

        assert_eq!(dashboard.calendar().selected(), date(2024, 5, 18));
        let day = dashboard.day_events();
        assert_eq!(day.ongoing.len(), 2);
        assert!(day.upcoming.is_empty());
        assert_eq!(dashboard.summary(), "2 events found");
    }

    #[test]
    fn user_dashboard_follows_selection() {
        let mut dashboard =
            UserDashboard::with_sample_events(date(2024, 5, 1), SelectionPolicy::Detached);

        dashboard.select_date(date(2024, 5, 20));
        let day = dashboard.day_events();
        assert!(day.ongoing.is_empty());
        assert_eq!(day.upcoming.len(), 1);
        assert_eq!(dashboard.summary(), "1 event found");

        dashboard.calendar_mut().select_day(21).unwrap();
        assert_eq!(dashboard.summary(), "0 events found");
    }

    #[tokio::test(start_paused = true)]
    async fn organiser_dashboard_refreshes_selected_date() {
        let config = EventSphereConfig::default();
        let source = Arc::new(StaticEvents(sample_events()));
        let mut dashboard =
            OrganiserDashboard::start(source, date(2024, 5, 18), date(2024, 5, 18), Vec::new(), &config)
                .unwrap();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(dashboard.date_events().events.len(), 2);

        dashboard.select_day(22).unwrap();
        assert_eq!(dashboard.calendar().selected(), date(2024, 5, 22));
        tokio::time::sleep(Duration::from_secs(1)).await;
        let snapshot = dashboard.date_events();
        assert_eq!(snapshot.date, date(2024, 5, 22));
        assert_eq!(snapshot.events[0].title, "Sci-Fi VR Experience");

        dashboard.next_month().unwrap();
        assert_eq!(dashboard.calendar().month().label(), "June 2024");
        assert_eq!(dashboard.date_events().date, date(2024, 5, 22));

        dashboard.close();
    }

    #[tokio::test(start_paused = true)]
    async fn organiser_dashboard_rejects_zero_interval() {
        let config = EventSphereConfig {
            refresh_interval_secs: 0,
            ..EventSphereConfig::default()
        };
        let source = Arc::new(StaticEvents(sample_events()));

        let result =
            OrganiserDashboard::start(source, date(2024, 5, 18), date(2024, 5, 18), Vec::new(), &config);
        assert!(matches!(result, Err(EventSphereError::InvalidArgument(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn organiser_dashboard_starts_on_requested_date() {
        let config = EventSphereConfig {
            selection_policy: SelectionPolicy::FollowSelection,
            ..EventSphereConfig::default()
        };
        let source = Arc::new(StaticEvents(sample_events()));
        let dashboard =
            OrganiserDashboard::start(source, date(2026, 10, 16), date(2024, 5, 20), Vec::new(), &config)
                .unwrap();

        assert_eq!(dashboard.calendar().selected(), date(2024, 5, 20));
        assert!(dashboard.calendar().is_today(date(2026, 10, 16)));
        assert_eq!(dashboard.calendar().month().label(), "May 2024");

        tokio::time::sleep(Duration::from_secs(1)).await;
        let snapshot = dashboard.date_events();
        assert_eq!(snapshot.date, date(2024, 5, 20));
        assert_eq!(snapshot.events[0].title, "Summer Music Jam");
    }

    #[test]
    fn admin_dashboard_defaults_to_placeholders() {
        let admin = AdminDashboard::default();
        assert_eq!(admin.profile.name(), "Jane Doe");
        assert_eq!(admin.tabs().len(), 5);
        assert_eq!(admin.mail_audiences()[0].label(), "Mail to All");
    }
}

//! EventSphere configuration.
//!
//! Read from `~/.config/eventsphere/config.toml`, then overridden by
//! `EVENTSPHERE_*` environment variables (e.g. `EVENTSPHERE_EVENTS_API_URL`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::calendar::SelectionPolicy;
use crate::error::{EventSphereError, EventSphereResult};

static DEFAULT_EVENTS_API_URL: &str = "http://localhost:5000";
static DEFAULT_ADMIN_API_URL: &str = "http://localhost:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 15;
const DEFAULT_ONGOING_LIMIT: u32 = 5;

fn default_events_api_url() -> String {
    DEFAULT_EVENTS_API_URL.to_string()
}

fn default_admin_api_url() -> String {
    DEFAULT_ADMIN_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

fn default_ongoing_limit() -> u32 {
    DEFAULT_ONGOING_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSphereConfig {
    /// Base URL of the events API (ongoing, by-date).
    #[serde(default = "default_events_api_url")]
    pub events_api_url: String,

    /// Base URL of the admin API (profile).
    #[serde(default = "default_admin_api_url")]
    pub admin_api_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How often the organiser view re-fetches events for the selected date.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// How many ongoing events the organiser view lists.
    #[serde(default = "default_ongoing_limit")]
    pub ongoing_limit: u32,

    #[serde(default)]
    pub selection_policy: SelectionPolicy,
}

impl Default for EventSphereConfig {
    fn default() -> Self {
        EventSphereConfig {
            events_api_url: default_events_api_url(),
            admin_api_url: default_admin_api_url(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            ongoing_limit: DEFAULT_ONGOING_LIMIT,
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl EventSphereConfig {
    pub fn config_path() -> EventSphereResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventSphereError::Config("Could not determine config directory".into()))?
            .join("eventsphere");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented default file first
    /// if none exists.
    pub fn load() -> EventSphereResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> EventSphereResult<Self> {
        let config: EventSphereConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("EVENTSPHERE"))
            .build()
            .map_err(|e| EventSphereError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventSphereError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> EventSphereResult<()> {
        self.events_base_url()?;
        self.admin_base_url()?;

        if self.request_timeout_secs == 0 {
            return Err(EventSphereError::Config(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        if self.refresh_interval_secs == 0 {
            return Err(EventSphereError::Config(
                "refresh_interval_secs must be at least 1".into(),
            ));
        }
        if self.ongoing_limit == 0 {
            return Err(EventSphereError::Config("ongoing_limit must be at least 1".into()));
        }

        Ok(())
    }

    pub fn events_base_url(&self) -> EventSphereResult<Url> {
        parse_base_url("events_api_url", &self.events_api_url)
    }

    pub fn admin_base_url(&self) -> EventSphereResult<Url> {
        parse_base_url("admin_api_url", &self.admin_api_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventSphereResult<()> {
        let contents = format!(
            "\
# EventSphere configuration

# Events API (ongoing events, events by date):
# events_api_url = \"{DEFAULT_EVENTS_API_URL}\"

# Admin API (profile):
# admin_api_url = \"{DEFAULT_ADMIN_API_URL}\"

# Seconds before a request is abandoned:
# request_timeout_secs = {DEFAULT_REQUEST_TIMEOUT_SECS}

# Seconds between refreshes of the selected date's events:
# refresh_interval_secs = {DEFAULT_REFRESH_INTERVAL_SECS}

# Number of ongoing events on the organiser dashboard:
# ongoing_limit = {DEFAULT_ONGOING_LIMIT}

# \"detached\" keeps the displayed month when selecting a date elsewhere,
# \"follow_selection\" navigates to the selected date's month:
# selection_policy = \"detached\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;

        Ok(())
    }
}

fn parse_base_url(key: &str, value: &str) -> EventSphereResult<Url> {
    Url::parse(value).map_err(|e| EventSphereError::Config(format!("Invalid {key} '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_default_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        EventSphereConfig::create_default_config(&path).unwrap();
        let config = EventSphereConfig::load_from(&path).unwrap();

        assert_eq!(config, EventSphereConfig::default());
        assert_eq!(config.refresh_interval(), Duration::from_secs(15));
        assert_eq!(config.ongoing_limit, 5);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "events_api_url = \"http://events.internal:9000\"\n\
             refresh_interval_secs = 30\n\
             selection_policy = \"follow_selection\"\n",
        )
        .unwrap();

        let config = EventSphereConfig::load_from(&path).unwrap();
        assert_eq!(config.events_api_url, "http://events.internal:9000");
        assert_eq!(config.admin_api_url, DEFAULT_ADMIN_API_URL);
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.selection_policy, SelectionPolicy::FollowSelection);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EventSphereConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.events_api_url, DEFAULT_EVENTS_API_URL);
    }

    #[test]
    fn rejects_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "admin_api_url = \"not a url\"\n").unwrap();
        assert!(matches!(
            EventSphereConfig::load_from(&path),
            Err(EventSphereError::Config(_))
        ));

        std::fs::write(&path, "refresh_interval_secs = 0\n").unwrap();
        assert!(EventSphereConfig::load_from(&path).is_err());
    }

    #[test]
    fn unwritable_location_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let result = EventSphereConfig::create_default_config(&blocker.join("config.toml"));
        assert!(matches!(result, Err(EventSphereError::Io(_))));
    }

    #[test]
    fn rejects_zero_request_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "request_timeout_secs = 0\n").unwrap();

        let err = EventSphereConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
    }
}

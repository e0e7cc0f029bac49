//! The read endpoints the dashboards call.
//!
//! Each request type names its path, the service that hosts it and the
//! response it decodes to, so `ApiClient::call` stays generic.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::event::EventRecord;
use crate::profile::AdminProfile;

/// Which configured base URL an endpoint lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Events,
    Admin,
}

pub trait Endpoint {
    /// Decoded body. A `null` body decodes to `Default::default()`.
    type Response: DeserializeOwned + Default;

    const SERVICE: Service;

    /// Path relative to the service base URL, without a leading slash.
    const PATH: &'static str;

    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Latest ongoing events, newest first as served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OngoingEvents {
    pub limit: u32,
}

impl Endpoint for OngoingEvents {
    type Response = Vec<EventRecord>;
    const SERVICE: Service = Service::Events;
    const PATH: &'static str = "api/events/ongoing";

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("limit", self.limit.to_string())]
    }
}

/// All events on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventsByDate {
    pub date: NaiveDate,
}

impl Endpoint for EventsByDate {
    type Response = Vec<EventRecord>;
    const SERVICE: Service = Service::Events;
    const PATH: &'static str = "api/events/by-date";

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("date", self.date.format("%Y-%m-%d").to_string())]
    }
}

/// The signed-in admin's profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminProfileRequest;

impl Endpoint for AdminProfileRequest {
    type Response = AdminProfile;
    const SERVICE: Service = Service::Admin;
    const PATH: &'static str = "api/admin/profile";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_date_query_is_iso_formatted() {
        let req = EventsByDate {
            date: NaiveDate::from_ymd_opt(2024, 5, 8).unwrap(),
        };
        assert_eq!(req.query(), vec![("date", "2024-05-08".to_string())]);
    }

    #[test]
    fn profile_has_no_query() {
        assert!(AdminProfileRequest.query().is_empty());
        assert_eq!(AdminProfileRequest::SERVICE, Service::Admin);
    }
}

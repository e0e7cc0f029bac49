//! HTTP client for the EventSphere read endpoints.
//!
//! Requests are plain GETs with no retry. Callers that only need something to
//! display use the `*_or_default` variants, which log the failure and fall
//! back to an empty list or a placeholder profile.

pub mod endpoint;
mod source;

use std::time::Duration;

use chrono::NaiveDate;
use url::Url;

use crate::config::EventSphereConfig;
use crate::error::{EventSphereError, EventSphereResult};
use crate::event::EventRecord;
use crate::profile::AdminProfile;
use endpoint::{AdminProfileRequest, Endpoint, EventsByDate, OngoingEvents, Service};

pub use source::{EventSource, StaticEvents};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    events_base: Url,
    admin_base: Url,
}

impl ApiClient {
    pub fn new(events_base: Url, admin_base: Url, timeout: Duration) -> EventSphereResult<Self> {
        if timeout.is_zero() {
            return Err(EventSphereError::InvalidArgument(
                "request timeout must be greater than zero".into(),
            ));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(ApiClient {
            http,
            events_base,
            admin_base,
        })
    }

    pub fn from_config(config: &EventSphereConfig) -> EventSphereResult<Self> {
        Self::new(
            config.events_base_url()?,
            config.admin_base_url()?,
            config.request_timeout(),
        )
    }

    fn base(&self, service: Service) -> &Url {
        match service {
            Service::Events => &self.events_base,
            Service::Admin => &self.admin_base,
        }
    }

    /// Full URL for an endpoint, keeping any path prefix of the base URL.
    pub fn url_for<E: Endpoint>(&self) -> EventSphereResult<Url> {
        let base = self.base(E::SERVICE);
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| EventSphereError::Config(format!("'{base}' cannot be used as a base URL")))?
            .pop_if_empty()
            .extend(E::PATH.split('/'));
        Ok(url)
    }

    /// GET an endpoint and decode its body.
    ///
    /// Transport failures and non-2xx statuses are `Network` errors; a body
    /// that does not decode is a `Serialization` error.
    pub async fn call<E: Endpoint>(&self, endpoint: &E) -> EventSphereResult<E::Response> {
        let url = self.url_for::<E>()?;
        tracing::debug!(%url, query = ?endpoint.query(), "GET");

        let response = self
            .http
            .get(url.clone())
            .query(&endpoint.query())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Default::default());
        }

        let decoded: Option<E::Response> = serde_json::from_slice(&body).map_err(|e| {
            EventSphereError::Serialization(format!("Unexpected response from {url}: {e}"))
        })?;

        Ok(decoded.unwrap_or_default())
    }

    pub async fn ongoing_events(&self, limit: u32) -> EventSphereResult<Vec<EventRecord>> {
        self.call(&OngoingEvents { limit }).await
    }

    pub async fn events_by_date(&self, date: NaiveDate) -> EventSphereResult<Vec<EventRecord>> {
        self.call(&EventsByDate { date }).await
    }

    pub async fn admin_profile(&self) -> EventSphereResult<AdminProfile> {
        self.call(&AdminProfileRequest).await
    }

    pub async fn ongoing_events_or_default(&self, limit: u32) -> Vec<EventRecord> {
        or_default("ongoing events", self.ongoing_events(limit).await)
    }

    pub async fn events_by_date_or_default(&self, date: NaiveDate) -> Vec<EventRecord> {
        or_default("events by date", self.events_by_date(date).await)
    }

    pub async fn admin_profile_or_default(&self) -> AdminProfile {
        or_default("admin profile", self.admin_profile().await)
    }
}

/// Recover from a failed fetch with an empty value.
pub fn or_default<T: Default>(what: &str, result: EventSphereResult<T>) -> T {
    result.unwrap_or_else(|error| {
        tracing::warn!(%error, "failed to fetch {what}; showing empty state");
        T::default()
    })
}

//! Where a dashboard gets the events for a date from.

use std::future::Future;

use chrono::NaiveDate;

use super::ApiClient;
use crate::error::EventSphereResult;
use crate::event::EventRecord;

pub trait EventSource: Send + Sync + 'static {
    fn events_on(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = EventSphereResult<Vec<EventRecord>>> + Send;
}

impl EventSource for ApiClient {
    async fn events_on(&self, date: NaiveDate) -> EventSphereResult<Vec<EventRecord>> {
        self.events_by_date(date).await
    }
}

/// A fixed in-memory list, filtered by exact date.
#[derive(Debug, Clone, Default)]
pub struct StaticEvents(pub Vec<EventRecord>);

impl EventSource for StaticEvents {
    async fn events_on(&self, date: NaiveDate) -> EventSphereResult<Vec<EventRecord>> {
        Ok(self.0.iter().filter(|e| e.is_on(date)).cloned().collect())
    }
}

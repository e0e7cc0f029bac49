//! Periodic refresh of the events shown for the selected date.
//!
//! One background task per selection fetches immediately and then on every
//! interval tick, replacing the published list wholesale. Changing the
//! selection cancels the task and starts a new one. A response is only
//! published while its date is still the selected one, so a slow fetch for
//! an old selection can never overwrite the list for the new one.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::api::EventSource;
use crate::error::{EventSphereError, EventSphereResult};
use crate::event::EventRecord;

/// What the view renders for the selected date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEventsSnapshot {
    pub date: NaiveDate,
    pub events: Vec<EventRecord>,
    /// A fetch for `date` is in flight.
    pub loading: bool,
}

impl DateEventsSnapshot {
    fn pending(date: NaiveDate) -> Self {
        DateEventsSnapshot {
            date,
            events: Vec::new(),
            loading: true,
        }
    }
}

/// Handle to the running refresh task. Dropping it stops the task.
pub struct DateEventsRefresher<S> {
    source: Arc<S>,
    interval: Duration,
    snapshots: watch::Sender<DateEventsSnapshot>,
    token: CancellationToken,
}

impl<S: EventSource> DateEventsRefresher<S> {
    /// Start refreshing `date`. Must be called from within a tokio runtime.
    ///
    /// A zero `interval` is rejected with `InvalidArgument`.
    pub fn spawn(source: Arc<S>, date: NaiveDate, interval: Duration) -> EventSphereResult<Self> {
        if interval.is_zero() {
            return Err(EventSphereError::InvalidArgument(
                "refresh interval must be greater than zero".into(),
            ));
        }

        let (snapshots, _) = watch::channel(DateEventsSnapshot::pending(date));
        let token = CancellationToken::new();

        tokio::spawn(run(
            Arc::clone(&source),
            date,
            interval,
            snapshots.clone(),
            token.clone(),
        ));

        Ok(DateEventsRefresher {
            source,
            interval,
            snapshots,
            token,
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<DateEventsSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn snapshot(&self) -> DateEventsSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn selected(&self) -> NaiveDate {
        self.snapshots.borrow().date
    }

    /// Switch to a new date: cancel the current task, clear the list and
    /// re-arm. Reselecting the current date is a no-op.
    pub fn reselect(&mut self, date: NaiveDate) {
        if self.selected() == date && !self.token.is_cancelled() {
            return;
        }

        self.token.cancel();
        self.snapshots.send_replace(DateEventsSnapshot::pending(date));

        self.token = CancellationToken::new();
        tokio::spawn(run(
            Arc::clone(&self.source),
            date,
            self.interval,
            self.snapshots.clone(),
            self.token.clone(),
        ));
    }

    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl<S> Drop for DateEventsRefresher<S> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn run<S: EventSource>(
    source: Arc<S>,
    date: NaiveDate,
    interval: Duration,
    snapshots: watch::Sender<DateEventsSnapshot>,
    token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        tracing::trace!(%date, "refreshing events for selected date");
        snapshots.send_if_modified(|current| {
            let start = current.date == date && !current.loading;
            if start {
                current.loading = true;
            }
            start
        });

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            result = source.events_on(date) => result,
        };

        publish(&snapshots, date, result);
    }

    tracing::debug!(%date, "refresh task stopped");
}

/// Publish a finished fetch if `date` is still the selected date.
///
/// On failure the previous list is kept.
fn publish(
    snapshots: &watch::Sender<DateEventsSnapshot>,
    date: NaiveDate,
    result: EventSphereResult<Vec<EventRecord>>,
) -> bool {
    snapshots.send_if_modified(|current| {
        if current.date != date {
            tracing::debug!(%date, selected = %current.date, "discarding superseded response");
            return false;
        }

        current.loading = false;
        match result {
            Ok(events) => current.events = events,
            Err(error) => {
                tracing::warn!(%error, %date, "failed to refresh events; keeping previous list")
            }
        }
        true
    })
}

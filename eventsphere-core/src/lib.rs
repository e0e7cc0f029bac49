//! Core logic for the EventSphere dashboards.
//!
//! This crate provides everything the admin, organiser and user views need
//! apart from drawing:
//! - `calendar`: month arithmetic, the week-aligned day grid and selection state
//! - `event`: event records and filtering them by date
//! - `api`: the HTTP client for the read endpoints
//! - `refresh`: the cancellable refresh of the selected date's events
//! - `dashboard`: per-role state built from the above

pub mod api;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod profile;
pub mod refresh;

pub use error::{EventSphereError, EventSphereResult};

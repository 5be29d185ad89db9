//! Core types and logic for the termcal calendar.
//!
//! This crate is UI-free. It provides:
//! - `date` for pure calendar arithmetic (month lengths, weekdays, week navigation)
//! - `event` and `store` for the event data model and its in-memory collection
//! - `codec` for the persisted JSON format, including the legacy schema fallback
//! - `view` and `drag` for the view cursor and the drag-to-reschedule state machine
//! - `app` for the application context that ties store, view and storage together

pub mod app;
pub mod codec;
pub mod date;
pub mod drag;
pub mod error;
pub mod event;
pub mod storage;
pub mod store;
pub mod view;

pub use app::CalendarApp;
pub use date::CalDate;
pub use event::{ClockTime, Event, EventId, EventTime};
pub use store::EventStore;

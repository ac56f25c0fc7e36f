//! # agenda-engine
//!
//! Deterministic per-day availability computation for booking calendars.
//!
//! Given a query instant and a number of days, the engine expands one-off and
//! weekly-recurring calendar events into concrete occurrences, slices each
//! event into fixed 30-minute slots, and resolves each day's free slots as
//! opening slots minus appointment slots.
//!
//! ## Modules
//!
//! - [`slots`] — time-of-day slot labels and event slicing
//! - [`expander`] — event → candidate occurrence dates within a query window
//! - [`bucket`] — per-day aggregation of slot labels by event kind
//! - [`availability`] — the public availability computation
//! - [`store`] — event source contract plus an in-memory implementation
//! - [`error`] — error types

pub mod availability;
pub mod bucket;
pub mod error;
pub mod event;
pub mod expander;
pub mod slots;
pub mod store;

pub use availability::{
    compute_availabilities, compute_availabilities_over, AvailabilityDay, DEFAULT_WINDOW_DAYS,
};
pub use error::AgendaError;
pub use event::{Event, EventKind};
pub use store::{EventStore, MemoryStore};

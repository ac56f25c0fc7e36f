//! Event source contract and an in-memory implementation.
//!
//! The engine is storage-agnostic: anything that can hand back the events
//! relevant to a query window works. Real deployments back this with a
//! database round trip; [`MemoryStore`] covers tests and embedded use.

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::event::Event;

/// Read-only source of calendar events.
pub trait EventStore {
    /// All events that can still contribute slots at or after `cutoff`:
    /// every weekly-recurring event, plus every one-off event whose
    /// `ends_at` is strictly after `cutoff`. Ordered ascending by
    /// `starts_at`.
    ///
    /// The engine issues exactly one call per availability computation and
    /// propagates any failure unchanged.
    fn candidate_events(&self, cutoff: NaiveDateTime) -> Result<Vec<Event>>;
}

/// In-memory event store honoring the [`EventStore`] contract.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    events: Vec<Event>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn insert(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl EventStore for MemoryStore {
    fn candidate_events(&self, cutoff: NaiveDateTime) -> Result<Vec<Event>> {
        let mut hits: Vec<Event> = self
            .events
            .iter()
            .filter(|event| event.weekly_recurring || event.ends_at > cutoff)
            .cloned()
            .collect();
        hits.sort_by_key(|event| event.starts_at);
        Ok(hits)
    }
}

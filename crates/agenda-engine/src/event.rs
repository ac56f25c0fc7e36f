//! Calendar event records as read from the backing store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// What a stretch of calendar time means for availability.
///
/// Stores may carry additional kinds; anything other than `"opening"` or
/// `"appointment"` deserializes to [`EventKind::Other`] and contributes
/// nothing to the computed slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Time the resource is available for booking.
    Opening,
    /// Already-booked time; removes overlapping slots from openings.
    Appointment,
    /// Unrecognized kind, accepted but ignored.
    #[serde(other)]
    Other,
}

/// A calendar event. Immutable once read from the store.
///
/// `starts_at < ends_at` is assumed, not validated: a degenerate event simply
/// yields no slots. When `weekly_recurring` is set, the single stored
/// occurrence repeats every 7 days from its original date, indefinitely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    #[serde(default)]
    pub weekly_recurring: bool,
}

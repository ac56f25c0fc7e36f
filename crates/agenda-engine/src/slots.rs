//! Time-of-day slot labels and event slicing.
//!
//! Slots are 30 minutes wide and anchored at each event's own `starts_at`,
//! not at a global clock grid: boundaries run `starts_at`, `starts_at + 30min`,
//! and so on until `ends_at`.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Fixed slot granularity in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Canonical label for the slot starting at `at`: hour without a leading
/// zero, minute zero-padded to two digits (`"9:30"`, `"11:00"`, `"0:00"`).
pub fn format_slot(at: NaiveDateTime) -> String {
    format!("{}:{:02}", at.hour(), at.minute())
}

/// Labels of the 30-minute slots covering `[starts_at, ends_at)`.
///
/// The cursor starts at `starts_at` and advances by [`SLOT_MINUTES`]; a label
/// is emitted at every position strictly before `ends_at`, so a trailing
/// partial slot keeps its label. An interval shorter than one slot (including
/// zero or negative duration) yields an empty vector.
pub fn enumerate_slots(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Vec<String> {
    let step = Duration::minutes(SLOT_MINUTES);
    if ends_at - starts_at < step {
        return Vec::new();
    }
    let mut labels = Vec::new();
    let mut cursor = starts_at;
    while cursor < ends_at {
        labels.push(format_slot(cursor));
        cursor += step;
    }
    labels
}

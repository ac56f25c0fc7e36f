//! Per-day aggregation of slot labels by event kind.
//!
//! Merges all events into one map from calendar date to that day's opening
//! and appointment slot labels. Lists are concatenated in event order, never
//! deduplicated or re-sorted -- a day may legitimately receive slots from
//! several opening or appointment events.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{Event, EventKind};
use crate::expander::occurrence_dates;
use crate::slots::enumerate_slots;

/// One calendar day's slot labels, split by event kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayBucket {
    pub opening: Vec<String>,
    pub appointment: Vec<String>,
}

/// Merge events into a fresh date-keyed bucket map.
///
/// Events must arrive in ascending `starts_at` order (the store contract), so
/// that concatenation order within a day reflects chronological event order.
/// Events of an unrecognized kind are skipped entirely.
pub fn collect_day_buckets(
    events: &[Event],
    query_date: NaiveDateTime,
    days_from_date: u32,
) -> HashMap<NaiveDate, DayBucket> {
    let mut buckets: HashMap<NaiveDate, DayBucket> = HashMap::new();

    for event in events {
        let list_for: fn(&mut DayBucket) -> &mut Vec<String> = match event.kind {
            EventKind::Opening => |bucket| &mut bucket.opening,
            EventKind::Appointment => |bucket| &mut bucket.appointment,
            EventKind::Other => continue,
        };
        // Sliced once per event, shared by all of its occurrence dates.
        let labels = enumerate_slots(event.starts_at, event.ends_at);

        for date in occurrence_dates(event, query_date, days_from_date) {
            let bucket = buckets.entry(date).or_default();
            list_for(bucket).extend_from_slice(&labels);
        }
    }

    buckets
}

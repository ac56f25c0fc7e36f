//! The public availability computation.
//!
//! Builds the requested window of calendar days, fetches candidate events
//! from the store (the single I/O call), aggregates them into day buckets,
//! and resolves each day's free slots as openings minus appointments.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::bucket::collect_day_buckets;
use crate::error::Result;
use crate::store::EventStore;

/// Window length used when the caller does not specify one.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One calendar day of the answer: the day's date (carrying the query
/// instant's time-of-day) and its free slot labels, in opening order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityDay {
    pub date: NaiveDateTime,
    pub slots: Vec<String>,
}

/// Compute availability for the default 7-day window.
///
/// See [`compute_availabilities_over`].
pub fn compute_availabilities(
    store: &dyn EventStore,
    query_date: NaiveDateTime,
) -> Result<Vec<AvailabilityDay>> {
    compute_availabilities_over(store, query_date, DEFAULT_WINDOW_DAYS)
}

/// Compute free slots for each day of `[query_date, query_date + days_from_date)`.
///
/// The result always holds exactly `days_from_date` entries, one per calendar
/// day in ascending order; `days_from_date == 0` yields an empty vector. Days
/// with no contributing events keep an empty slot list. Within a day, slots
/// are the concatenated opening labels (chronological event order) with every
/// label that also appears among the day's appointment labels removed --
/// appointments act as an unordered exclusion set, and the surviving opening
/// order is not re-sorted.
///
/// # Errors
/// A store failure propagates unchanged; there is no retry and no partial
/// result.
pub fn compute_availabilities_over(
    store: &dyn EventStore,
    query_date: NaiveDateTime,
    days_from_date: u32,
) -> Result<Vec<AvailabilityDay>> {
    // The window carries query_date's time-of-day on every entry; only the
    // calendar-day component advances.
    let mut window: Vec<AvailabilityDay> = (0..days_from_date)
        .map(|day| AvailabilityDay {
            date: query_date + Duration::days(i64::from(day)),
            slots: Vec::new(),
        })
        .collect();

    let events = store.candidate_events(query_date)?;
    let buckets = collect_day_buckets(&events, query_date, days_from_date);

    for day in &mut window {
        // Expander over-generation lands on keys no window day carries, so
        // out-of-window buckets are never read.
        if let Some(bucket) = buckets.get(&day.date.date()) {
            let booked: HashSet<&str> = bucket.appointment.iter().map(String::as_str).collect();
            day.slots.extend(
                bucket
                    .opening
                    .iter()
                    .filter(|label| !booked.contains(label.as_str()))
                    .cloned(),
            );
        }
    }

    Ok(window)
}

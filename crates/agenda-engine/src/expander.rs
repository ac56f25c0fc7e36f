//! Occurrence expansion -- converts an event into the calendar dates on which
//! it contributes slots, relative to a query window.
//!
//! A weekly-recurring event repeats every 7 days from its original date. The
//! expander skips ahead by whole weeks to land just before the query instant,
//! then walks forward one week at a time across the window. Candidates outside
//! the window are fine: the resolver's exact-key day lookup discards them.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::event::Event;

/// Candidate occurrence dates for one event against the window
/// `[query_date, query_date + days_from_date)`.
///
/// Non-recurring events produce exactly their own start date, which may lie
/// outside the window. Recurring events produce their original date plus one
/// candidate per week across the window, deduplicated and in ascending order
/// after the leading origin date.
///
/// The week count uses a ceiling division so that windows shorter than a full
/// week still reach their last partial week, and the skip-adjusted base date
/// itself is kept so that a query landing exactly on a recurrence boundary
/// still sees that day's occurrence.
pub fn occurrence_dates(
    event: &Event,
    query_date: NaiveDateTime,
    days_from_date: u32,
) -> Vec<NaiveDate> {
    let origin = event.starts_at.date();
    if !event.weekly_recurring {
        return vec![origin];
    }

    // Whole weeks elapsed from the event's first occurrence to the query
    // instant, truncated. A query before the origin skips nothing.
    let weeks_to_skip = (query_date - event.starts_at).num_weeks().max(0);
    let base = origin + Duration::weeks(weeks_to_skip);
    let weekly_steps = i64::from(days_from_date.div_ceil(7));

    let mut dates = Vec::with_capacity(weekly_steps as usize + 2);
    if base != origin {
        dates.push(origin);
    }
    for week in 0..=weekly_steps {
        dates.push(base + Duration::weeks(week));
    }
    dates
}

//! Tests for slot labels and event slicing.

use agenda_engine::slots::{enumerate_slots, format_slot};
use chrono::NaiveDateTime;

fn at(s: &str) -> NaiveDateTime {
    s.parse().unwrap()
}

#[test]
fn label_has_no_leading_hour_zero() {
    assert_eq!(format_slot(at("2014-08-04T09:05:00")), "9:05");
    assert_eq!(format_slot(at("2014-08-04T00:00:00")), "0:00");
}

#[test]
fn label_pads_minutes_to_two_digits() {
    assert_eq!(format_slot(at("2014-08-04T11:00:00")), "11:00");
    assert_eq!(format_slot(at("2014-08-04T18:30:00")), "18:30");
}

#[test]
fn three_hour_opening_yields_six_slots() {
    let labels = enumerate_slots(at("2014-08-04T09:00:00"), at("2014-08-04T12:00:00"));
    assert_eq!(labels, vec!["9:00", "9:30", "10:00", "10:30", "11:00", "11:30"]);
}

#[test]
fn slots_anchor_at_the_event_start_not_a_global_grid() {
    // A 9:45 start stays on the :15/:45 boundaries.
    let labels = enumerate_slots(at("2014-08-04T09:45:00"), at("2014-08-04T11:00:00"));
    assert_eq!(labels, vec!["9:45", "10:15", "10:45"]);
}

#[test]
fn forty_five_minute_opening_yields_two_slots() {
    // The 9:30 boundary precedes the end, so the truncated final slot is
    // still emitted.
    let labels = enumerate_slots(at("2014-08-04T09:00:00"), at("2014-08-04T09:45:00"));
    assert_eq!(labels, vec!["9:00", "9:30"]);
}

#[test]
fn exactly_one_slot_yields_one_label() {
    let labels = enumerate_slots(at("2014-08-04T09:00:00"), at("2014-08-04T09:30:00"));
    assert_eq!(labels, vec!["9:00"]);
}

#[test]
fn interval_shorter_than_one_slot_is_empty() {
    let labels = enumerate_slots(at("2014-08-04T09:00:00"), at("2014-08-04T09:15:00"));
    assert!(labels.is_empty());
}

#[test]
fn degenerate_intervals_are_empty() {
    // ends_at <= starts_at is not validated upstream; it must simply yield
    // no slots.
    assert!(enumerate_slots(at("2014-08-04T09:00:00"), at("2014-08-04T09:00:00")).is_empty());
    assert!(enumerate_slots(at("2014-08-04T12:00:00"), at("2014-08-04T09:00:00")).is_empty());
}

#[test]
fn trailing_partial_slot_keeps_its_label() {
    let labels = enumerate_slots(at("2014-08-04T09:00:00"), at("2014-08-04T10:15:00"));
    assert_eq!(labels, vec!["9:00", "9:30", "10:00"]);
}

#[test]
fn slots_may_wrap_past_midnight() {
    // Labels encode time-of-day only; the date component is dropped.
    let labels = enumerate_slots(at("2014-08-04T23:00:00"), at("2014-08-05T00:30:00"));
    assert_eq!(labels, vec!["23:00", "23:30", "0:00"]);
}

//! End-to-end checks of the public clock API with a pinned time source.

use std::sync::Arc;

use chrono::{Local, NaiveDate, TimeZone, Utc};
use serial_test::serial;
use tzclock::time_source::{self, FixedTimeSource};
use tzclock::{ClockError, DayPhase, DayRelation, convert, convert_on, day_relation, now_in_zone};

/// Pin the clock to 2026-01-15 12:00:00 UTC. The global source is set-once,
/// so every test in this binary shares the same instant.
fn pin_clock() {
    let instant = Utc
        .with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
        .unwrap()
        .with_timezone(&Local);
    let _ = time_source::set_source(Arc::new(FixedTimeSource(instant)));
}

#[test]
#[serial]
fn live_clocks_share_the_instant() {
    pin_clock();

    let london = now_in_zone("Europe/London").unwrap();
    let sydney = now_in_zone("Australia/Sydney").unwrap();

    assert_eq!((london.hour(), london.minute(), london.second()), (12, 0, 0));
    assert_eq!((sydney.hour(), sydney.minute(), sydney.second()), (23, 0, 0));
    assert_eq!(
        day_relation(&london, &sydney),
        (DayRelation::SameDay, DayRelation::SameDay)
    );
}

#[test]
#[serial]
fn converting_an_afternoon_crosses_into_tomorrow() {
    pin_clock();

    let source = convert("14:30:00", "Europe/London", "Europe/London").unwrap();
    let target = convert("14:30:00", "Europe/London", "Australia/Sydney").unwrap();

    assert_eq!((target.hour(), target.minute()), (1, 30));
    assert_eq!(
        day_relation(&target, &source),
        (DayRelation::DayAfter, DayRelation::DayBefore)
    );
}

#[test]
fn explicit_anchor_dates_need_no_clock() {
    let anchor = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
    let out = convert_on(anchor, "14:30:00", "Europe/London", "Australia/Sydney").unwrap();
    assert_eq!((out.hour(), out.minute(), out.day()), (23, 30, 15));
}

#[test]
fn the_error_surface_is_typed() {
    assert_eq!(
        now_in_zone("Not/AZone"),
        Err(ClockError::InvalidTimezone("Not/AZone".to_string()))
    );
    let anchor = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    assert_eq!(
        convert_on(anchor, "abc", "Europe/London", "Australia/Sydney"),
        Err(ClockError::InvalidTimeFormat("abc".to_string()))
    );
    assert_eq!(DayPhase::from_hour(24), Err(ClockError::HourOutOfRange(24)));
}

#[test]
fn the_day_partitions_match_the_dial() {
    assert_eq!(DayPhase::from_hour(3), Ok(DayPhase::Night));
    assert_eq!(DayPhase::from_hour(12), Ok(DayPhase::WorkingDay));
    assert_eq!(DayPhase::from_hour(20), Ok(DayPhase::Evening));
}

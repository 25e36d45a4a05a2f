//! Wall-clock conversion between timezones.
//!
//! Converts an "HH:MM[:SS]" wall-clock time from a source zone to a target
//! zone on the current reference date. The composed local datetime is
//! interpreted in the source zone through the tz database, so the correct
//! standard/daylight offset is picked up for the anchor date, then shifted to
//! the target zone with `with_timezone`.
//!
//! The reference date is always "today" in the caller's local zone, not the
//! source zone's current date. Near local midnight the anchor can therefore
//! differ from the source zone's calendar day; this matches the original
//! contract and is covered by the explicit-date seam [`convert_on`].

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
             Timelike};
use chrono_tz::Tz;

use crate::error::{ClockError, Result};
use crate::zoned_time::{ZonedInstant, parse_zone};

/// Convert a wall-clock time between two zones, anchored to today's local
/// date. See [`convert_on`] for the explicit-date variant.
pub fn convert(time: &str, source: &str, target: &str) -> Result<ZonedInstant> {
    convert_on(crate::time_source::now().date_naive(), time, source, target)
}

/// Convert a wall-clock time between two zones on an explicit anchor date.
///
/// `time` must parse as `HH:MM:SS` or `HH:MM` (seconds default to 0, all
/// components in range). Offsets for both zones are resolved for the anchor
/// date, so conversions across a DST boundary pick up the shifted offset.
pub fn convert_on(
    anchor: NaiveDate,
    time: &str,
    source: &str,
    target: &str,
) -> Result<ZonedInstant> {
    let wall = parse_wall_time(time)?;
    let source_tz = parse_zone(source)?;
    let target_tz = parse_zone(target)?;

    let source_dt = resolve_local(source_tz, anchor.and_time(wall))
        .ok_or_else(|| ClockError::InvalidTimeFormat(time.to_string()))?;

    Ok(ZonedInstant::new(source_dt.with_timezone(&target_tz)))
}

/// Parse an "HH:MM[:SS]" wall-clock string into a NaiveTime.
fn parse_wall_time(time: &str) -> Result<NaiveTime> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| ClockError::InvalidTimeFormat(time.to_string()))?;

    // %S admits the leap-second value 60 (carried in the nanosecond field);
    // the wall-clock grammar caps seconds at 59.
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(ClockError::InvalidTimeFormat(time.to_string()));
    }

    Ok(parsed)
}

/// Map a naive local datetime into a zone.
///
/// Ambiguous times (fall-back fold) resolve to the earliest mapping;
/// nonexistent times (spring-forward gap) shift forward one hour. DST gaps
/// are at most an hour for present-day rules; anything still unresolved
/// surfaces as an error in the caller.
fn resolve_local(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => tz.from_local_datetime(&(naive + Duration::hours(1))).earliest(),
    }
}

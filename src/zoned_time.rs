//! Current-time lookup with full timezone context.
//!
//! This module provides the `ZonedInstant` type: an absolute point in time
//! paired with the IANA timezone used to derive its wall-clock fields. By
//! storing a `DateTime<Tz>` the instant carries its date and offset through
//! every comparison and conversion, so day boundaries and DST shifts resolve
//! through the tz database rather than through string formatting.

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;

use crate::error::{ClockError, Result};

/// An absolute instant paired with the timezone its wall-clock fields are
/// derived in. Second precision; sub-second digits are always zero.
///
/// Instants are value-like: regenerated on every tick or conversion, never
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedInstant(DateTime<Tz>);

impl ZonedInstant {
    pub(crate) fn new(dt: DateTime<Tz>) -> Self {
        Self(truncate_to_second(dt))
    }

    /// The timezone the wall-clock fields are expressed in.
    pub fn zone(&self) -> Tz {
        self.0.timezone()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Hour on the 24-hour clock (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// The underlying timezone-aware timestamp.
    pub fn datetime(&self) -> DateTime<Tz> {
        self.0
    }
}

/// Helper to truncate a DateTime<Tz> to second precision.
fn truncate_to_second(dt: DateTime<Tz>) -> DateTime<Tz> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Parse an IANA timezone identifier (e.g. "Europe/London").
pub fn parse_zone(zone: &str) -> Result<Tz> {
    zone.parse()
        .map_err(|_| ClockError::InvalidTimezone(zone.to_string()))
}

/// Current date-time as perceived in the given timezone.
///
/// Reads the clock through the time source abstraction, so two calls within
/// the same whole second return field-equal results and tests can pin the
/// instant.
pub fn now_in_zone(zone: &str) -> Result<ZonedInstant> {
    let tz = parse_zone(zone)?;
    Ok(ZonedInstant::new(
        crate::time_source::now().with_timezone(&tz),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_zone() {
        assert_eq!(
            now_in_zone("Europe/Atlantis"),
            Err(ClockError::InvalidTimezone("Europe/Atlantis".to_string()))
        );
        assert!(parse_zone("").is_err());
        assert!(parse_zone("London").is_err());
    }

    #[test]
    fn fields_follow_the_zone() {
        // Fixed instant: 2026-01-15 12:00:00 UTC. London is on GMT in
        // January, Sydney on AEDT (UTC+11).
        crate::time_source::test_support::install_fixed();

        let london = now_in_zone("Europe/London").unwrap();
        assert_eq!(
            (london.hour(), london.minute(), london.second()),
            (12, 0, 0)
        );
        assert_eq!((london.year(), london.month(), london.day()), (2026, 1, 15));

        let sydney = now_in_zone("Australia/Sydney").unwrap();
        assert_eq!((sydney.hour(), sydney.day()), (23, 15));
    }

    #[test]
    fn calls_within_the_same_second_are_field_equal() {
        crate::time_source::test_support::install_fixed();

        let a = now_in_zone("Europe/London").unwrap();
        let b = now_in_zone("Europe/London").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sub_second_precision_is_truncated() {
        crate::time_source::test_support::install_fixed();

        let instant = now_in_zone("Australia/Sydney").unwrap();
        assert_eq!(instant.datetime().nanosecond(), 0);
    }

    #[test]
    fn field_ranges_hold_for_a_zone_sample() {
        crate::time_source::test_support::install_fixed();

        for zone in [
            "UTC",
            "Europe/London",
            "Australia/Sydney",
            "America/New_York",
            "Asia/Kathmandu",
            "Pacific/Kiritimati",
            "Pacific/Marquesas",
        ] {
            let instant = now_in_zone(zone).unwrap();
            assert!(instant.hour() <= 23, "{zone}");
            assert!(instant.minute() <= 59, "{zone}");
            assert!(instant.second() <= 59, "{zone}");
            assert!((1..=31).contains(&instant.day()), "{zone}");
        }
    }
}

//! Hour classification and calendar-day relation between zoned instants.

use std::cmp::Ordering;

use crate::error::{ClockError, Result};
use crate::zoned_time::ZonedInstant;

/// Time-of-day bucket for an hour on the 24-hour clock.
///
/// The three partitions are exhaustive and disjoint over 0-23:
/// night = 0-7, working day = 8-17, evening = 18-23.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum DayPhase {
    Night,
    WorkingDay,
    Evening,
}

impl DayPhase {
    /// Classify an hour-of-day. Fails for hours outside 0-23.
    pub fn from_hour(hour: u32) -> Result<Self> {
        match hour {
            0..=7 => Ok(Self::Night),
            8..=17 => Ok(Self::WorkingDay),
            18..=23 => Ok(Self::Evening),
            _ => Err(ClockError::HourOutOfRange(hour)),
        }
    }

    /// Returns the display name for this phase.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Night => "night",
            Self::WorkingDay => "working day",
            Self::Evening => "evening",
        }
    }
}

/// Relative calendar-day relation between two zoned instants.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum DayRelation {
    DayBefore,
    SameDay,
    DayAfter,
}

/// Compare the calendar days of two instants, returning the relation from
/// each side's perspective as `(a's, b's)`.
///
/// Only the day-of-month fields are consulted: at a month boundary 31 vs 1
/// reads as (DayAfter, DayBefore), mirroring the behavior this tool
/// replaces.
pub fn day_relation(a: &ZonedInstant, b: &ZonedInstant) -> (DayRelation, DayRelation) {
    match a.day().cmp(&b.day()) {
        Ordering::Greater => (DayRelation::DayAfter, DayRelation::DayBefore),
        Ordering::Less => (DayRelation::DayBefore, DayRelation::DayAfter),
        Ordering::Equal => (DayRelation::SameDay, DayRelation::SameDay),
    }
}

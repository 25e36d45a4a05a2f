//! Wall-clock formatting for terminal display.
//!
//! The locale-facing collaborator: the core hands over structured field
//! values and this module turns them into clock strings, day-boundary
//! markers, and phase-colored table cells. Nothing here feeds back into the
//! conversion logic.

use crate::day_phase::{DayPhase, DayRelation};
use crate::zoned_time::ZonedInstant;

/// Placeholder rendered when a conversion is not available.
pub const NOT_AVAILABLE: &str = "not available";

/// Format an instant as a clock reading on the 12- or 24-hour dial.
pub fn format_time(instant: &ZonedInstant, use_12_hour: bool) -> String {
    if use_12_hour {
        instant.datetime().format("%-I:%M:%S %p").to_string()
    } else {
        instant.datetime().format("%H:%M:%S").to_string()
    }
}

/// Format only the hour, for the 24-hour table rows.
pub fn format_hour(instant: &ZonedInstant, use_12_hour: bool) -> String {
    if use_12_hour {
        instant.datetime().format("%-I %p").to_string()
    } else {
        instant.datetime().format("%H:00").to_string()
    }
}

/// City name from an IANA identifier: the segment after the last slash with
/// underscores spaced ("America/New_York" -> "New York").
pub fn zone_city(zone: &str) -> String {
    zone.rsplit('/').next().unwrap_or(zone).replace('_', " ")
}

/// Marker appended to a converted time that crossed a day boundary.
pub fn relation_marker(relation: DayRelation) -> &'static str {
    match relation {
        DayRelation::DayBefore => " (-1d)",
        DayRelation::SameDay => "",
        DayRelation::DayAfter => " (+1d)",
    }
}

/// Paint a table cell with the background color for its day phase:
/// dark blue for night, light blue for the working day, mid blue for
/// evening.
pub fn paint_phase(text: &str, phase: DayPhase) -> String {
    match phase {
        DayPhase::Night => format!("\x1b[48;5;17m\x1b[97m{text}\x1b[0m"),
        DayPhase::WorkingDay => format!("\x1b[48;5;153m\x1b[30m{text}\x1b[0m"),
        DayPhase::Evening => format!("\x1b[48;5;25m\x1b[97m{text}\x1b[0m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert_on;
    use chrono::NaiveDate;

    fn instant(time: &str) -> ZonedInstant {
        let anchor = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
        convert_on(anchor, time, "Europe/London", "Europe/London").unwrap()
    }

    #[test]
    fn formats_both_dials() {
        let afternoon = instant("14:30:05");
        assert_eq!(format_time(&afternoon, true), "2:30:05 PM");
        assert_eq!(format_time(&afternoon, false), "14:30:05");

        let midnight = instant("00:15:00");
        assert_eq!(format_time(&midnight, true), "12:15:00 AM");
        assert_eq!(format_time(&midnight, false), "00:15:00");
    }

    #[test]
    fn formats_table_hours() {
        assert_eq!(format_hour(&instant("09:00:00"), true), "9 AM");
        assert_eq!(format_hour(&instant("09:00:00"), false), "09:00");
        assert_eq!(format_hour(&instant("00:00:00"), true), "12 AM");
    }

    #[test]
    fn city_names_come_from_the_identifier() {
        assert_eq!(zone_city("Europe/London"), "London");
        assert_eq!(zone_city("America/New_York"), "New York");
        assert_eq!(zone_city("America/Argentina/Buenos_Aires"), "Buenos Aires");
        assert_eq!(zone_city("UTC"), "UTC");
    }

    #[test]
    fn phase_painting_wraps_and_resets() {
        let cell = paint_phase("9 AM", DayPhase::WorkingDay);
        assert!(cell.contains("9 AM"));
        assert!(cell.ends_with("\x1b[0m"));
    }
}

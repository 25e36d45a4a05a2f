//! 24-hour conversion table command.
//!
//! One row per source-zone hour 00-23: the source hour, the converted target
//! hour, a day-boundary marker where the conversion crosses midnight, and a
//! background color per day phase on both cells.

use anyhow::Result;

use crate::config::Config;
use crate::convert::convert;
use crate::day_phase::{DayPhase, day_relation};
use crate::display;
use crate::zoned_time::ZonedInstant;

const CELL_WIDTH: usize = 16;

/// Print the 24-hour lookup table for the configured zone pair.
pub fn handle_table_command(config: &Config, reverse: bool, debug_enabled: bool) -> Result<()> {
    let (mut source, mut target) = (config.primary_zone(), config.secondary_zone());
    if reverse {
        std::mem::swap(&mut source, &mut target);
    }
    let use_12_hour = config.use_12_hour();

    if debug_enabled {
        log_pipe!();
        log_debug!("Table direction: {source} -> {target}");
    }

    println!(
        "{:<CELL_WIDTH$} {:<CELL_WIDTH$}",
        display::zone_city(source),
        display::zone_city(target),
    );
    println!("{}", "─".repeat(CELL_WIDTH * 2 + 1));

    for hour in 0..24 {
        let time = format!("{hour:02}:00:00");
        let row = match (
            convert(&time, source, source),
            convert(&time, source, target),
        ) {
            (Ok(source_instant), Ok(target_instant)) => {
                let (target_relation, _) = day_relation(&target_instant, &source_instant);
                let left = cell(&source_instant, "", use_12_hour)?;
                let right = cell(
                    &target_instant,
                    display::relation_marker(target_relation),
                    use_12_hour,
                )?;
                format!("{left} {right}")
            }
            _ => format!(
                "{:<CELL_WIDTH$} {:<CELL_WIDTH$}",
                display::NOT_AVAILABLE,
                display::NOT_AVAILABLE
            ),
        };
        println!("{row}");
    }

    Ok(())
}

/// A fixed-width, phase-colored table cell for one instant.
fn cell(instant: &ZonedInstant, marker: &str, use_12_hour: bool) -> Result<String> {
    let phase = DayPhase::from_hour(instant.hour())?;
    let label = format!(" {}{marker}", display::format_hour(instant, use_12_hour));
    Ok(display::paint_phase(&format!("{label:<CELL_WIDTH$}"), phase))
}

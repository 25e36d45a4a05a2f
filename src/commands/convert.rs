//! One-shot wall-clock conversion command.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::day_phase::day_relation;
use crate::display;

/// Convert a wall-clock time between the configured (or overridden) zones
/// and print both readings with a day-boundary marker.
pub fn handle_convert_command(
    config: &Config,
    time: &str,
    from: Option<&str>,
    to: Option<&str>,
    reverse: bool,
    debug_enabled: bool,
) -> Result<()> {
    let (mut source, mut target) = (config.primary_zone(), config.secondary_zone());
    if reverse {
        std::mem::swap(&mut source, &mut target);
    }
    let source = from.unwrap_or(source);
    let target = to.unwrap_or(target);

    if debug_enabled {
        log_pipe!();
        log_debug!("Resolved zones: {source} -> {target}");
    }

    // The identity conversion pins the source-side instant the day relation
    // is measured against.
    let source_instant = crate::convert::convert(time, source, source)
        .with_context(|| format!("cannot interpret {time:?} in {source}"))?;
    let target_instant = crate::convert::convert(time, source, target)
        .with_context(|| format!("cannot convert {time:?} from {source} to {target}"))?;
    let (target_relation, _) = day_relation(&target_instant, &source_instant);

    let use_12_hour = config.use_12_hour();
    log_block_start!("Converting {time} from {source} to {target}");
    log_indented!(
        "{}: {}",
        display::zone_city(source),
        display::format_time(&source_instant, use_12_hour)
    );
    log_indented!(
        "{}: {}{}",
        display::zone_city(target),
        display::format_time(&target_instant, use_12_hour),
        display::relation_marker(target_relation)
    );
    log_end!();

    Ok(())
}

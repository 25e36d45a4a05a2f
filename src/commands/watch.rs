//! Live clock display with a cancellable tick loop.
//!
//! The loop blocks on the signal channel with the tick interval as the
//! timeout: a timeout repaints every zone's clock, a shutdown message
//! (SIGINT/SIGTERM/SIGHUP) exits the loop immediately. The terminal guard
//! restores the cursor on every exit path, so no tick or terminal state
//! outlives the loop.

use anyhow::Result;
use crossterm::{cursor, execute, terminal};
use std::io::stdout;
use std::sync::atomic::Ordering;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::config::Config;
use crate::display;
use crate::signals::{SignalMessage, setup_signal_handler};
use crate::utils::TerminalGuard;
use crate::zoned_time::now_in_zone;

/// Run the live clock display until a termination signal arrives.
pub fn handle_watch_command(config: &Config, debug_enabled: bool) -> Result<()> {
    if debug_enabled {
        log_pipe!();
        log_debug!("Debug mode enabled - showing tick details");
    }
    config.log_config();

    let signal_state = setup_signal_handler()?;
    let zones = [config.primary_zone(), config.secondary_zone()];
    let tick = Duration::from_secs(config.tick_interval_secs());
    let use_12_hour = config.use_12_hour();

    log_block_start!(
        "Watching {} and {} (Ctrl-C to exit)",
        display::zone_city(zones[0]),
        display::zone_city(zones[1])
    );
    log_pipe!();

    let _term = TerminalGuard::new()?;
    let mut first_paint = true;

    while signal_state.running.load(Ordering::SeqCst) {
        paint_clocks(&zones, use_12_hour, first_paint)?;
        first_paint = false;

        match signal_state.signal_receiver.recv_timeout(tick) {
            Ok(SignalMessage::Shutdown) => break,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                log_pipe!();
                log_warning!("Signal handler disconnected unexpectedly");
                break;
            }
        }
    }

    log_block_start!("Shutting down tzclock...");
    log_end!();

    Ok(())
}

/// Repaint one clock line per zone, overwriting the previous tick's lines.
fn paint_clocks(zones: &[&str], use_12_hour: bool, first_paint: bool) -> Result<()> {
    let mut out = stdout();
    if !first_paint {
        execute!(out, cursor::MoveUp(zones.len() as u16))?;
    }

    for zone in zones {
        execute!(out, terminal::Clear(terminal::ClearType::CurrentLine))?;
        // A failed read renders the placeholder; the tick keeps going.
        let reading = match now_in_zone(zone) {
            Ok(instant) => display::format_time(&instant, use_12_hour),
            Err(_) => display::NOT_AVAILABLE.to_string(),
        };
        println!(
            "┃   {:<14} {reading:<14} ({zone})",
            display::zone_city(zone)
        );
    }

    Ok(())
}

//! Signal handling for the live clock loop.
//!
//! A dedicated thread turns SIGINT/SIGTERM/SIGHUP into messages on a channel
//! the watch loop blocks on. The loop's `recv_timeout` doubles as the display
//! tick, so a shutdown signal interrupts the wait immediately instead of
//! being noticed on the next tick.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    sync::mpsc,
    thread,
};

/// Message delivered to the watch loop when a termination signal arrives.
#[derive(Debug, Clone)]
pub enum SignalMessage {
    Shutdown,
}

/// Signal handling state shared between threads.
pub struct SignalState {
    /// Atomic flag indicating if the application should keep running.
    pub running: Arc<AtomicBool>,
    /// Channel receiver the watch loop blocks on.
    pub signal_receiver: mpsc::Receiver<SignalMessage>,
}

/// Register the signal handler thread and return the shared state.
pub fn setup_signal_handler() -> Result<SignalState> {
    let running = Arc::new(AtomicBool::new(true));
    let (signal_sender, signal_receiver) = mpsc::channel::<SignalMessage>();

    let mut signals =
        Signals::new([SIGINT, SIGTERM, SIGHUP]).context("failed to register signal handlers")?;

    let running_clone = running.clone();
    thread::spawn(move || {
        for _sig in signals.forever() {
            running_clone.store(false, Ordering::SeqCst);
            if signal_sender.send(SignalMessage::Shutdown).is_err() {
                break;
            }
        }
    });

    Ok(SignalState {
        running,
        signal_receiver,
    })
}

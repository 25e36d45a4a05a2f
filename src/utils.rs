//! Shared utilities: terminal state management.

use anyhow::Result;
use crossterm::{cursor, execute};
use std::io::stdout;

/// Hides the cursor for the duration of the live display and restores it on
/// drop, including on error paths and signal-triggered shutdown.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        execute!(stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), cursor::Show);
    }
}

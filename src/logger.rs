//! Structured logging with visual formatting.
//!
//! Provides the box-drawing log macros used across the application. Output is
//! structured into blocks: `log_version!` opens the run, `log_block_start!`
//! begins a conceptual block, `log_decorated!`/`log_indented!` continue it,
//! `log_pipe!` inserts vertical spacing, and `log_end!` terminates the run.
//! The semantic macros (`log_warning!`, `log_error!`, `log_info!`,
//! `log_debug!`) carry an ANSI-colored `[LEVEL]` prefix.
//!
//! Logging can be disabled at runtime for quiet operation during tests.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Main logging interface providing structured output formatting.
pub struct Log;

impl Log {
    /// Enable or disable logging temporarily.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }
}

/// Write formatted text to stdout and flush it.
pub fn write_output(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

/// Log a decorated message, typically as part of an existing block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣ {message}\n"));
        }
    }};
}

/// Log an indented message for sub-items or details within a block.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┃   {message}\n"));
        }
    }};
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log a block start message, initiating a new conceptual block.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┃\n┣ {message}\n"));
        }
    }};
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ tzclock v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Log a warning message with pipe prefix and yellow-colored level.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[33mWARNING\x1b[0m] {message}\n"));
        }
    }};
}

/// Log an error message with pipe prefix and red-colored level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[31mERROR\x1b[0m] {message}\n"));
        }
    }};
}

/// Log an informational message with pipe prefix and green-colored level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[32mINFO\x1b[0m] {message}\n"));
        }
    }};
}

/// Log a debug/operational message with pipe prefix and green-colored level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[32mDEBUG\x1b[0m] {message}\n"));
        }
    }};
}

//! # tzclock library
//!
//! Internal library for the tzclock binary.
//!
//! This library exists to enable testing of the clock core and to keep a
//! clean separation between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! - **Core**: `zoned_time` (current time in a zone), `convert` (wall-clock
//!   conversion between zones), `day_phase` (hour classification and
//!   calendar-day relation) — pure functions over `ZonedInstant`, with typed
//!   errors in `error`
//! - **Presentation**: `display` formats structured field values into clock
//!   strings and table cells; `commands` hosts the watch/convert/table
//!   handlers
//! - **Infrastructure**: `config` (TOML settings), `args` (CLI parsing),
//!   `signals` (shutdown channel), `time_source` (clock abstraction for
//!   deterministic tests), `logger` (structured output)

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod convert;
pub mod day_phase;
pub mod display;
pub mod error;
pub mod signals;
pub mod time_source;
pub mod utils;
pub mod zoned_time;

// Re-export the core surface
pub use convert::{convert, convert_on};
pub use day_phase::{DayPhase, DayRelation, day_relation};
pub use error::ClockError;
pub use zoned_time::{ZonedInstant, now_in_zone};

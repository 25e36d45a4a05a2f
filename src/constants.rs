//! Shared constants and configuration defaults.

/// Zone shown first in the live display and used as the conversion source.
pub const DEFAULT_PRIMARY_ZONE: &str = "Europe/London";

/// Zone shown second and used as the conversion target.
pub const DEFAULT_SECONDARY_ZONE: &str = "Australia/Sydney";

/// Live clock refresh interval in seconds.
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 1;
pub const MINIMUM_TICK_INTERVAL_SECS: u64 = 1;
pub const MAXIMUM_TICK_INTERVAL_SECS: u64 = 60;

/// Whether clocks render on the 12-hour dial by default.
pub const DEFAULT_USE_12_HOUR: bool = true;

/// Process exit code for failures.
pub const EXIT_FAILURE: i32 = 1;

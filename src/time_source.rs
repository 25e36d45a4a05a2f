//! Time source abstraction for the clock core.
//!
//! All code that needs the current instant reads it through this module
//! instead of calling `Local::now()` directly. The default source is the
//! system clock; tests (and the `testing-support` feature) can install a
//! fixed-instant source so time-dependent behavior becomes deterministic.

use chrono::{DateTime, Local};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

/// Global time source instance, defaults to the system clock.
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting time operations.
pub trait TimeSource: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Local>;

    /// Sleep for the specified duration (or skip it).
    fn sleep(&self, duration: Duration);
}

/// Real-time implementation that uses the actual system clock.
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Fixed-instant source for deterministic tests. `sleep` is a no-op.
#[cfg(any(test, feature = "testing-support"))]
pub struct FixedTimeSource(pub DateTime<Local>);

#[cfg(any(test, feature = "testing-support"))]
impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Local> {
        self.0
    }

    fn sleep(&self, _duration: Duration) {}
}

fn source() -> &'static Arc<dyn TimeSource> {
    TIME_SOURCE.get_or_init(|| Arc::new(SystemTimeSource))
}

/// Get the current time from the active source.
pub fn now() -> DateTime<Local> {
    source().now()
}

/// Sleep through the active source.
pub fn sleep(duration: Duration) {
    source().sleep(duration)
}

/// Install a custom time source. Returns false if a source (including the
/// lazily-initialized system default) is already active; the global can only
/// be set once per process, so tests installing a source must do so before
/// any call to [`now`].
#[cfg(any(test, feature = "testing-support"))]
pub fn set_source(src: Arc<dyn TimeSource>) -> bool {
    TIME_SOURCE.set(src).is_ok()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::{TimeZone, Utc};

    /// Canonical fixed instant shared by every in-crate test that reads the
    /// clock: 2026-01-15 12:00:00 UTC. The global source is set-once, so all
    /// such tests must pin the same instant.
    pub fn install_fixed() -> DateTime<Local> {
        let instant = Utc
            .with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
            .unwrap()
            .with_timezone(&Local);
        let _ = TIME_SOURCE.set(Arc::new(FixedTimeSource(instant)));
        instant
    }
}

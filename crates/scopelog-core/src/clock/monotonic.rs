//! Monotonic clock implementation

use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::Lazy;

use super::traits::Clock;

static SHARED: Lazy<Arc<MonotonicClock>> = Lazy::new(|| Arc::new(MonotonicClock::new()));

/// A clock backed by `std::time::Instant`
///
/// `Instant` is the highest-resolution monotonic clock the platform offers;
/// readings are millisecond offsets from the clock's creation.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Create a clock with its origin at the current instant
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// The process-wide shared clock
    ///
    /// All loggers created through the default factory measure against this
    /// single origin.
    pub fn shared() -> Arc<MonotonicClock> {
        SHARED.clone()
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

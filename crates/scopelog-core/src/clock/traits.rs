//! Clock trait definition

use std::sync::Arc;

/// Monotonic clock abstraction
///
/// Implementations:
/// - `MonotonicClock`: Reads `std::time::Instant` against a fixed origin
/// - `ManualClock`: Returns scripted readings for testing
pub trait Clock: Send + Sync {
    /// Current reading in milliseconds from the clock's origin
    ///
    /// Readings are monotonic non-decreasing; only differences between two
    /// readings are meaningful.
    fn now_millis(&self) -> f64;
}

/// Type alias for an Arc-wrapped clock
pub type SharedClock = Arc<dyn Clock>;

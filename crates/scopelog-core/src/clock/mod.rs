//! Monotonic time abstractions for elapsed-time measurement

mod traits;
mod monotonic;
mod manual;

pub use traits::{Clock, SharedClock};
pub use monotonic::MonotonicClock;
pub use manual::ManualClock;

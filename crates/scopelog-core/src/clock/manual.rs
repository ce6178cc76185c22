//! Manually scripted clock implementation

use std::collections::VecDeque;

use parking_lot::Mutex;

use super::traits::Clock;

/// A clock that returns scripted readings, for testing
///
/// Each call to `now_millis` pops the next scripted reading; once the script
/// is exhausted the final reading repeats.
#[derive(Debug, Default)]
pub struct ManualClock {
    readings: Mutex<VecDeque<f64>>,
    last: Mutex<f64>,
}

impl ManualClock {
    /// Create a clock that always reads zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock with an initial script of readings
    pub fn with_readings(readings: impl IntoIterator<Item = f64>) -> Self {
        Self {
            readings: Mutex::new(readings.into_iter().collect()),
            last: Mutex::new(0.0),
        }
    }

    /// Append a reading to the script
    pub fn push_reading(&self, reading: f64) {
        self.readings.lock().push_back(reading);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> f64 {
        let mut last = self.last.lock();
        if let Some(next) = self.readings.lock().pop_front() {
            *last = next;
        }
        *last
    }
}

//! Wall-clock abstraction.
//!
//! The memory-drift model and response timestamps read the current time
//! through this trait rather than `SystemTime` directly, so tests can
//! fast-forward through the drift period without real delays.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch, fractional.
    fn epoch_seconds(&self) -> f64;
}

/// Production clock backed by `SystemTime`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_seconds(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64()
    }
}

/// Fixed clock for tests.
#[cfg(test)]
pub struct FixedClock(pub f64);

#[cfg(test)]
impl Clock for FixedClock {
    fn epoch_seconds(&self) -> f64 {
        self.0
    }
}

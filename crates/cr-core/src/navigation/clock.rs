//! Monotonic clock abstraction behind the throttle window

use parking_lot::RwLock;
use std::time::{Duration, Instant};

/// Source of monotonic time for the navigation engine
pub trait NavClock: Send + Sync {
    fn now(&self) -> Instant;
}

/// System clock used in production
#[derive(Debug, Default)]
pub struct MonotonicClock;

impl NavClock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for deterministic throttle tests
pub struct ManualClock {
    origin: Instant,
    offset: RwLock<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: RwLock::new(Duration::ZERO),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        *self.offset.write() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl NavClock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + *self.offset.read()
    }
}

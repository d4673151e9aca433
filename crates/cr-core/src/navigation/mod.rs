use serde::{Deserialize, Serialize};
use std::time::Duration;

mod clock;
mod engine;
mod subscriber;

pub use clock::{ManualClock, MonotonicClock, NavClock};
pub use engine::{CompletionGuard, NavContext, NavigationEngine, Transition};
pub use subscriber::TransitionSubscriber;

/// Direction of a single step through the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavDirection {
    /// Step forward, wrapping past the end
    Next,
    /// Step backward, wrapping past the start
    Prev,
}

impl NavDirection {
    /// Sign of the horizontal slide for this direction: forward transitions
    /// push the current item out to the left, backward to the right.
    pub fn sign(self) -> f32 {
        match self {
            NavDirection::Next => 1.0,
            NavDirection::Prev => -1.0,
        }
    }
}

/// A normalized navigation request, produced by the input adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Step one item in the given direction
    Step(NavDirection),
    /// Jump directly to a specific catalog entry
    Select(usize),
}

/// Emitted to subscribers when a navigation request is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEvent {
    pub from: usize,
    pub to: usize,
    pub direction: NavDirection,
}

/// Engine tuning
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Minimum elapsed time between two accepted requests.
    /// Zero disables throttling; the transition lock still applies.
    pub throttle: Duration,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            throttle: Duration::from_millis(800),
        }
    }
}

impl NavConfig {
    /// Lock-only variant, used by the pricelist wheel
    pub fn lock_only() -> Self {
        Self {
            throttle: Duration::ZERO,
        }
    }
}

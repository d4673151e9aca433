//! Navigation engine: index wrapping, transition lock, throttle window

use super::{
    MonotonicClock, NavClock, NavConfig, NavDirection, NavRequest, TransitionEvent,
    TransitionSubscriber,
};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use std::time::Instant;
use tracing::debug;

/// Navigation state stored internally
#[derive(Debug)]
struct NavState {
    current: usize,
    transitioning: bool,
    /// Target index of the in-flight transition, if any
    pending: Option<usize>,
    /// Time of the last *accepted* request, for throttling
    last_accepted: Option<Instant>,
    len: usize,
}

/// Snapshot of the navigation state handed to views each frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavContext {
    pub current_index: usize,
    pub is_transitioning: bool,
    pub len: usize,
}

/// The carousel navigation engine.
///
/// Requests funnel in from the input adapters; the engine either rejects
/// them silently (empty catalog, transition in flight, throttle window) or
/// accepts them, emitting a [`TransitionEvent`] and handing back a
/// [`Transition`] whose guard releases the lock exactly once.
pub struct NavigationEngine {
    state: Arc<RwLock<NavState>>,
    config: NavConfig,
    clock: Arc<dyn NavClock>,
    subscribers: Arc<RwLock<Vec<Weak<dyn TransitionSubscriber>>>>,
}

/// An accepted navigation request: the event to animate, plus the guard
/// that commits the target index and releases the lock when the visual
/// sequence settles (or is torn down).
pub struct Transition {
    pub event: TransitionEvent,
    pub guard: CompletionGuard,
}

impl NavigationEngine {
    /// Create an engine over a catalog of `len` items
    pub fn new(len: usize, config: NavConfig) -> Self {
        Self::with_clock(len, config, Arc::new(MonotonicClock))
    }

    /// Create an engine with an explicit clock (tests use [`super::ManualClock`])
    pub fn with_clock(len: usize, config: NavConfig, clock: Arc<dyn NavClock>) -> Self {
        let state = NavState {
            current: 0,
            transitioning: false,
            pending: None,
            last_accepted: None,
            len,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            config,
            clock,
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Reset for a (re)supplied catalog: index back to 0, lock cleared.
    /// Any guard still outstanding from the previous catalog becomes inert.
    pub fn set_catalog_len(&self, len: usize) {
        let mut state = self.state.write();
        state.len = len;
        state.current = 0;
        state.pending = None;
        state.transitioning = false;
        state.last_accepted = None;
    }

    /// Submit a navigation request.
    ///
    /// Returns `None` when the request is dropped: empty catalog, directional
    /// step on a single item, transition already in flight, throttle window
    /// not yet elapsed, or a selection that is out of range or already
    /// current. Rejection is silent by design; rapid repeated input coalesces
    /// to one transition and is never queued.
    pub fn request(&self, request: NavRequest) -> Option<Transition> {
        let now = self.clock.now();
        let mut state = self.state.write();

        if state.len == 0 || state.transitioning {
            return None;
        }
        if let Some(last) = state.last_accepted {
            if now.duration_since(last) < self.config.throttle {
                return None;
            }
        }

        let (to, direction) = match request {
            NavRequest::Step(direction) => {
                // Wrapping to the same index is suppressed, not animated
                if state.len <= 1 {
                    return None;
                }
                let to = match direction {
                    NavDirection::Next => (state.current + 1) % state.len,
                    NavDirection::Prev => (state.current + state.len - 1) % state.len,
                };
                (to, direction)
            }
            NavRequest::Select(index) => {
                if index >= state.len || index == state.current {
                    return None;
                }
                let direction = if index > state.current {
                    NavDirection::Next
                } else {
                    NavDirection::Prev
                };
                (index, direction)
            }
        };

        let event = TransitionEvent {
            from: state.current,
            to,
            direction,
        };
        state.transitioning = true;
        state.pending = Some(to);
        state.last_accepted = Some(now);
        drop(state);

        debug!(from = event.from, to = event.to, "navigation accepted");
        self.notify_subscribers(&event);

        Some(Transition {
            event,
            guard: CompletionGuard {
                state: Arc::downgrade(&self.state),
                to,
                fired: false,
            },
        })
    }

    /// Get the current navigation context
    pub fn context(&self) -> NavContext {
        let state = self.state.read();
        NavContext {
            current_index: state.current,
            is_transitioning: state.transitioning,
            len: state.len,
        }
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn TransitionSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of an accepted transition
    fn notify_subscribers(&self, event: &TransitionEvent) {
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_transition_start(event);
            }
        }
    }
}

/// Single-fire completion handle for an accepted transition.
///
/// `complete` commits the target index and releases the lock. Dropping an
/// unfired guard does the same, so an animation torn down mid-flight can
/// never leave the navigation permanently locked.
pub struct CompletionGuard {
    state: Weak<RwLock<NavState>>,
    to: usize,
    fired: bool,
}

impl CompletionGuard {
    /// Commit the transition and release the lock
    pub fn complete(mut self) {
        self.fire();
    }

    fn fire(&mut self) {
        if self.fired {
            return;
        }
        self.fired = true;

        let Some(state) = self.state.upgrade() else {
            return;
        };
        let mut state = state.write();

        // A guard can outlive its transition only if the catalog was reset
        // underneath it; such a guard must not clobber the fresh state.
        if state.pending != Some(self.to) {
            return;
        }
        state.current = self.to;
        state.pending = None;
        state.transitioning = false;
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.fire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{request_for_key, request_for_scroll};
    use crate::navigation::ManualClock;
    use parking_lot::Mutex;
    use std::time::Duration;

    fn lock_only(len: usize) -> NavigationEngine {
        NavigationEngine::new(len, NavConfig::lock_only())
    }

    fn next() -> NavRequest {
        NavRequest::Step(NavDirection::Next)
    }

    fn prev() -> NavRequest {
        NavRequest::Step(NavDirection::Prev)
    }

    #[test]
    fn test_wrap_around() {
        for n in 1..=6usize {
            let engine = lock_only(n);
            for _ in 0..n {
                if let Some(t) = engine.request(next()) {
                    t.guard.complete();
                }
            }
            assert_eq!(engine.context().current_index, 0, "next x{} wraps", n);

            for _ in 0..n {
                if let Some(t) = engine.request(prev()) {
                    t.guard.complete();
                }
            }
            assert_eq!(engine.context().current_index, 0, "prev x{} wraps", n);
        }
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let engine = lock_only(5);
        let t = engine.request(prev()).unwrap();
        assert_eq!(t.event.to, 4);
        t.guard.complete();
        assert_eq!(engine.context().current_index, 4);
    }

    #[test]
    fn test_mutual_exclusion() {
        let engine = lock_only(5);
        let t = engine.request(next()).unwrap();
        assert!(engine.context().is_transitioning);

        // Everything is a no-op while the lock is held
        assert!(engine.request(next()).is_none());
        assert!(engine.request(prev()).is_none());
        assert!(engine.request(NavRequest::Select(3)).is_none());
        assert_eq!(engine.context().current_index, 0);
        assert!(engine.context().is_transitioning);

        t.guard.complete();
        assert!(!engine.context().is_transitioning);
        assert_eq!(engine.context().current_index, 1);
    }

    #[test]
    fn test_throttle_window() {
        let clock = Arc::new(ManualClock::new());
        let engine = NavigationEngine::with_clock(5, NavConfig::default(), clock.clone());

        let t = engine.request(next()).unwrap();
        t.guard.complete();

        // Second request inside the window is dropped even though the
        // first transition has already settled
        assert!(engine.request(next()).is_none());
        assert_eq!(engine.context().current_index, 1);

        clock.advance(Duration::from_millis(799));
        assert!(engine.request(next()).is_none());

        clock.advance(Duration::from_millis(1));
        let t = engine.request(next()).unwrap();
        t.guard.complete();
        assert_eq!(engine.context().current_index, 2);
    }

    #[test]
    fn test_empty_catalog() {
        let engine = lock_only(0);
        assert!(engine.request(next()).is_none());
        assert!(engine.request(prev()).is_none());
        assert!(engine.request(NavRequest::Select(0)).is_none());
        assert!(!engine.context().is_transitioning);
    }

    #[test]
    fn test_single_item_catalog() {
        let engine = lock_only(1);
        assert!(engine.request(next()).is_none());
        assert!(engine.request(prev()).is_none());
        assert_eq!(engine.context().current_index, 0);
        assert!(!engine.context().is_transitioning);
    }

    #[test]
    fn test_select_guards() {
        let engine = lock_only(4);
        // Already current
        assert!(engine.request(NavRequest::Select(0)).is_none());
        // Out of range
        assert!(engine.request(NavRequest::Select(4)).is_none());
        assert!(!engine.context().is_transitioning);
    }

    #[test]
    fn test_unlock_on_guard_drop() {
        let engine = lock_only(5);
        let t = engine.request(next()).unwrap();
        assert!(engine.context().is_transitioning);

        // Teardown mid-transition: dropping the guard settles the lock
        drop(t);
        let ctx = engine.context();
        assert!(!ctx.is_transitioning);
        assert_eq!(ctx.current_index, 1);
    }

    #[test]
    fn test_stale_guard_after_catalog_reset() {
        let engine = lock_only(5);
        let t = engine.request(next()).unwrap();

        // Catalog resupplied while a transition is in flight
        engine.set_catalog_len(3);
        drop(t);

        let ctx = engine.context();
        assert_eq!(ctx.current_index, 0);
        assert!(!ctx.is_transitioning);
        assert_eq!(ctx.len, 3);
    }

    #[test]
    fn test_scenario_five_artists_arrow_right() {
        let engine = lock_only(5);
        let mut seen = Vec::new();

        for _ in 0..5 {
            let request = request_for_key(egui::Key::ArrowRight).unwrap();
            let t = engine.request(request).unwrap();
            assert!(engine.context().is_transitioning);
            t.guard.complete();
            assert!(!engine.context().is_transitioning);
            seen.push(engine.context().current_index);
        }

        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_scenario_single_package_wheel() {
        let engine = lock_only(1);
        let request = request_for_scroll(-12.0).unwrap();
        assert!(engine.request(request).is_none());
        assert_eq!(engine.context().current_index, 0);
        assert!(!engine.context().is_transitioning);
    }

    #[test]
    fn test_scenario_direct_selection() {
        let engine = lock_only(6);
        let t = engine.request(NavRequest::Select(3)).unwrap();
        assert_eq!(t.event.from, 0);
        assert_eq!(t.event.to, 3);
        assert_eq!(t.event.direction, NavDirection::Next);
        t.guard.complete();

        // Direct jump, indices 1 and 2 never become current
        assert_eq!(engine.context().current_index, 3);
    }

    struct RecordingSubscriber {
        events: Mutex<Vec<TransitionEvent>>,
    }

    impl TransitionSubscriber for RecordingSubscriber {
        fn on_transition_start(&self, event: &TransitionEvent) {
            self.events.lock().push(*event);
        }
    }

    #[test]
    fn test_subscribers_notified_once_per_accept() {
        let engine = lock_only(3);
        let subscriber = Arc::new(RecordingSubscriber {
            events: Mutex::new(Vec::new()),
        });
        engine.add_subscriber(subscriber.clone());

        let t = engine.request(next()).unwrap();
        // Rejected request must not notify
        assert!(engine.request(next()).is_none());
        t.guard.complete();

        let events = subscriber.events.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].from, 0);
        assert_eq!(events[0].to, 1);
    }
}

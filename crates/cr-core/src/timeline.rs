//! Transition timelines driving the visual effects
//!
//! Timelines are ticked with frame delta time from the UI loop and are fully
//! deterministic: tests drive them with fixed steps instead of sleeping.
//! A timeline that owns a [`CompletionGuard`] releases the navigation lock
//! exactly once, either when it finishes or when it is dropped at teardown.

use crate::ease;
use crate::navigation::{CompletionGuard, NavDirection};

/// Duration of each phase of the image swap, seconds
pub const SWAP_PHASE_SECS: f32 = 0.6;
/// Fraction of the exit phase the enter phase overlaps: the incoming item
/// starts moving while the outgoing one still has ~30% of its slide left
pub const SWAP_OVERLAP: f32 = 0.3;

/// Detail-pane fade-out duration, seconds
pub const FADE_OUT_SECS: f32 = 0.15;
/// Detail-pane fade-in duration per element, seconds
pub const FADE_IN_SECS: f32 = 0.3;
/// Stagger between consecutive detail elements, seconds
pub const FADE_STAGGER_SECS: f32 = 0.05;

/// Picker wheel slide duration, seconds
pub const WHEEL_SLIDE_SECS: f32 = 0.4;

/// Two-phase slide/fade of the showcase image: the current item moves out
/// in the transition direction while the incoming one enters from the
/// opposite side, with the phases overlapping for perceived smoothness.
pub struct SwapTimeline {
    elapsed: f32,
    exit_secs: f32,
    enter_secs: f32,
    overlap: f32,
    direction: NavDirection,
    guard: Option<CompletionGuard>,
}

/// Eased sample of a [`SwapTimeline`] for one frame
#[derive(Debug, Clone, Copy)]
pub struct SwapFrame {
    /// Exit phase progress, eased, 0..=1
    pub exit: f32,
    /// Enter phase progress, eased, 0..=1
    pub enter: f32,
    pub direction: NavDirection,
    pub finished: bool,
}

impl SwapFrame {
    /// Horizontal offset of the outgoing item as a fraction of the panel width
    pub fn exit_offset(&self) -> f32 {
        -self.direction.sign() * self.exit
    }

    /// Opacity of the outgoing item
    pub fn exit_alpha(&self) -> f32 {
        1.0 - self.exit
    }

    /// Horizontal offset of the incoming item, entering from the side the
    /// outgoing one is not moving toward
    pub fn enter_offset(&self) -> f32 {
        self.direction.sign() * (1.0 - self.enter)
    }

    /// Opacity of the incoming item
    pub fn enter_alpha(&self) -> f32 {
        self.enter
    }
}

impl SwapTimeline {
    /// Start a swap for an accepted transition; the guard is released when
    /// the full sequence settles or the timeline is dropped
    pub fn new(direction: NavDirection, guard: CompletionGuard) -> Self {
        Self {
            elapsed: 0.0,
            exit_secs: SWAP_PHASE_SECS,
            enter_secs: SWAP_PHASE_SECS,
            overlap: SWAP_OVERLAP,
            direction,
            guard: Some(guard),
        }
    }

    /// Time at which the enter phase begins
    fn enter_start(&self) -> f32 {
        self.exit_secs * (1.0 - self.overlap)
    }

    /// Total duration of the sequence
    pub fn total_secs(&self) -> f32 {
        self.enter_start() + self.enter_secs
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_secs()
    }

    /// Advance by one frame and sample the eased state.
    /// Completes the guard on the tick that finishes the sequence.
    pub fn tick(&mut self, dt: f32) -> SwapFrame {
        self.elapsed += dt.max(0.0);

        let exit_t = self.elapsed / self.exit_secs;
        let enter_t = (self.elapsed - self.enter_start()) / self.enter_secs;
        let finished = self.is_finished();

        if finished {
            if let Some(guard) = self.guard.take() {
                guard.complete();
            }
        }

        SwapFrame {
            exit: ease::quad_in_out(exit_t),
            enter: ease::quad_in_out(enter_t),
            direction: self.direction,
            finished,
        }
    }
}

/// Detail-pane content swap: fade the old content out as a whole, then fade
/// the new elements in one by one with a short stagger. Runs on its own
/// clock, decoupled from the image swap.
pub struct ContentFade {
    elapsed: f32,
}

impl ContentFade {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// A fade that starts already showing the new content, used on first
    /// mount when there is nothing to fade out
    pub fn immediate() -> Self {
        Self {
            elapsed: FADE_OUT_SECS,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    /// True once the fade-out has finished and the new content should be
    /// mounted in place of the old
    pub fn ready_to_swap(&self) -> bool {
        self.elapsed >= FADE_OUT_SECS
    }

    /// Opacity of the outgoing content as a whole
    pub fn out_alpha(&self) -> f32 {
        1.0 - ease::quad_in(self.elapsed / FADE_OUT_SECS)
    }

    /// Opacity of incoming element `index`
    pub fn element_alpha(&self, index: usize) -> f32 {
        let start = FADE_OUT_SECS + FADE_STAGGER_SECS * index as f32;
        ease::quad_out((self.elapsed - start) / FADE_IN_SECS)
    }

    /// Upward settle offset of incoming element `index`, in points
    pub fn element_offset(&self, index: usize) -> f32 {
        20.0 * (1.0 - self.element_alpha(index))
    }

    /// Whether every element of an `element_count`-element pane has settled
    pub fn is_finished(&self, element_count: usize) -> bool {
        let last = element_count.saturating_sub(1) as f32;
        self.elapsed >= FADE_OUT_SECS + FADE_STAGGER_SECS * last + FADE_IN_SECS
    }
}

impl Default for ContentFade {
    fn default() -> Self {
        Self::new()
    }
}

/// Eased slide of the picker wheel between index positions.
///
/// The wheel renders items relative to a continuous position; the slide
/// moves that position toward the committed index with a cubic ease-out.
pub struct WheelSlide {
    from: f32,
    to: f32,
    elapsed: f32,
    guard: Option<CompletionGuard>,
}

impl WheelSlide {
    /// A wheel already settled at `index`
    pub fn settled_at(index: usize) -> Self {
        Self {
            from: index as f32,
            to: index as f32,
            elapsed: WHEEL_SLIDE_SECS,
            guard: None,
        }
    }

    /// Begin sliding from the current position toward `to`
    pub fn retarget(&mut self, to: usize, guard: CompletionGuard) {
        // The engine lock means no guard should still be pending here, but
        // settle it rather than lose it if one is
        if let Some(stale) = self.guard.take() {
            stale.complete();
        }
        self.from = self.value();
        self.to = to as f32;
        self.elapsed = 0.0;
        self.guard = Some(guard);
    }

    /// Current continuous wheel position
    pub fn value(&self) -> f32 {
        let t = ease::cubic_out(self.elapsed / WHEEL_SLIDE_SECS);
        self.from + (self.to - self.from) * t
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= WHEEL_SLIDE_SECS
    }

    /// Jump to the target and release the guard, for view teardown
    pub fn settle_now(&mut self) {
        self.elapsed = WHEEL_SLIDE_SECS;
        self.from = self.to;
        if let Some(guard) = self.guard.take() {
            guard.complete();
        }
    }

    /// Advance by one frame, completing the guard when the slide settles
    pub fn tick(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        if self.is_settled() {
            if let Some(guard) = self.guard.take() {
                guard.complete();
            }
        }
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavConfig, NavDirection, NavRequest, NavigationEngine};

    fn engine_with_transition(len: usize) -> (NavigationEngine, SwapTimeline) {
        let engine = NavigationEngine::new(len, NavConfig::lock_only());
        let t = engine.request(NavRequest::Step(NavDirection::Next)).unwrap();
        let timeline = SwapTimeline::new(t.event.direction, t.guard);
        (engine, timeline)
    }

    #[test]
    fn test_swap_enter_phase_overlap() {
        let (_engine, mut timeline) = engine_with_transition(3);
        // Enter phase begins at 0.6 * 0.7 = 0.42s
        let frame = timeline.tick(0.41);
        assert_eq!(frame.enter, 0.0);
        assert!(frame.exit > 0.0);

        let frame = timeline.tick(0.02);
        assert!(frame.enter > 0.0);
        assert!(frame.exit < 1.0, "phases overlap");
    }

    #[test]
    fn test_swap_frame_geometry_next() {
        let (_engine, mut timeline) = engine_with_transition(3);

        let start = timeline.tick(0.0);
        assert_eq!(start.exit_offset(), 0.0);
        assert_eq!(start.exit_alpha(), 1.0);
        assert_eq!(start.enter_offset(), 1.0);
        assert_eq!(start.enter_alpha(), 0.0);

        let end = timeline.tick(10.0);
        assert!(end.finished);
        assert_eq!(end.exit_offset(), -1.0);
        assert_eq!(end.exit_alpha(), 0.0);
        assert_eq!(end.enter_offset(), 0.0);
        assert_eq!(end.enter_alpha(), 1.0);
    }

    #[test]
    fn test_swap_frame_geometry_prev() {
        let engine = NavigationEngine::new(3, NavConfig::lock_only());
        let t = engine.request(NavRequest::Step(NavDirection::Prev)).unwrap();
        let mut timeline = SwapTimeline::new(t.event.direction, t.guard);

        let start = timeline.tick(0.0);
        assert_eq!(start.enter_offset(), -1.0);
        let end = timeline.tick(10.0);
        assert_eq!(end.exit_offset(), 1.0);
    }

    #[test]
    fn test_swap_completion_unlocks_engine() {
        let (engine, mut timeline) = engine_with_transition(3);
        assert!(engine.context().is_transitioning);

        let total = timeline.total_secs();
        let mut elapsed = 0.0;
        while elapsed < total {
            timeline.tick(1.0 / 60.0);
            elapsed += 1.0 / 60.0;
            if !timeline.is_finished() {
                assert!(engine.context().is_transitioning);
            }
        }

        let ctx = engine.context();
        assert!(!ctx.is_transitioning);
        assert_eq!(ctx.current_index, 1);

        // Ticking past the end stays settled
        timeline.tick(1.0);
        assert_eq!(engine.context().current_index, 1);
    }

    #[test]
    fn test_swap_teardown_midway_releases_lock() {
        let (engine, mut timeline) = engine_with_transition(5);

        // Unmount at 50% of the animation
        timeline.tick(timeline.total_secs() * 0.5);
        assert!(engine.context().is_transitioning);
        drop(timeline);

        let ctx = engine.context();
        assert!(!ctx.is_transitioning, "teardown must release the lock");
        assert_eq!(ctx.current_index, 1);

        // Navigation works again after the teardown settle
        assert!(engine.request(NavRequest::Step(NavDirection::Next)).is_some());
    }

    #[test]
    fn test_content_fade_sequence() {
        let mut fade = ContentFade::new();
        assert!(!fade.ready_to_swap());
        assert_eq!(fade.out_alpha(), 1.0);

        fade.tick(FADE_OUT_SECS);
        assert!(fade.ready_to_swap());
        assert_eq!(fade.out_alpha(), 0.0);

        // Element 1 is staggered behind element 0
        fade.tick(0.01);
        assert!(fade.element_alpha(0) > 0.0);
        assert_eq!(fade.element_alpha(1), 0.0);

        fade.tick(10.0);
        assert_eq!(fade.element_alpha(0), 1.0);
        assert_eq!(fade.element_offset(3), 0.0);
        assert!(fade.is_finished(4));
    }

    #[test]
    fn test_content_fade_finish_accounts_for_stagger() {
        let mut fade = ContentFade::new();
        fade.tick(FADE_OUT_SECS + FADE_IN_SECS);
        assert!(fade.is_finished(1));
        assert!(!fade.is_finished(4));
    }

    #[test]
    fn test_wheel_slide_settles_and_unlocks() {
        let engine = NavigationEngine::new(4, NavConfig::lock_only());
        let mut slide = WheelSlide::settled_at(0);
        assert_eq!(slide.value(), 0.0);

        let t = engine.request(NavRequest::Select(2)).unwrap();
        slide.retarget(t.event.to, t.guard);
        assert!(engine.context().is_transitioning);

        let mid = slide.tick(WHEEL_SLIDE_SECS / 2.0);
        assert!(mid > 0.0 && mid < 2.0);
        assert!(engine.context().is_transitioning);

        slide.tick(WHEEL_SLIDE_SECS);
        assert!(slide.is_settled());
        assert_eq!(slide.value(), 2.0);
        let ctx = engine.context();
        assert!(!ctx.is_transitioning);
        assert_eq!(ctx.current_index, 2);
    }

    #[test]
    fn test_wheel_slide_drop_releases_lock() {
        let engine = NavigationEngine::new(4, NavConfig::lock_only());
        let mut slide = WheelSlide::settled_at(0);
        let t = engine.request(NavRequest::Select(3)).unwrap();
        slide.retarget(t.event.to, t.guard);
        slide.tick(0.1);

        drop(slide);
        let ctx = engine.context();
        assert!(!ctx.is_transitioning);
        assert_eq!(ctx.current_index, 3);
    }
}

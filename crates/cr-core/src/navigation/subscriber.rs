//! Transition subscriber trait

use super::TransitionEvent;

/// Trait for collaborators that react to accepted navigation requests,
/// e.g. the detail-pane renderer starting its own content swap.
pub trait TransitionSubscriber: Send + Sync {
    /// Called once per accepted transition, before any animation runs
    fn on_transition_start(&self, event: &TransitionEvent);
}

//! Core navigation and transition logic for the Crescentials experience
//!
//! This crate provides the carousel state machine shared by the artist
//! showcase and the pricelist picker: the navigation engine with its
//! transition lock and throttle window, the transition timelines that drive
//! the visual effects, and the input adapters that normalize
//! keyboard/wheel/click input.

pub mod ease;
pub mod input;
pub mod navigation;
pub mod timeline;

// Re-export commonly used types
pub use navigation::{
    CompletionGuard, ManualClock, MonotonicClock, NavClock, NavConfig, NavContext, NavDirection,
    NavRequest, NavigationEngine, Transition, TransitionEvent, TransitionSubscriber,
};
pub use timeline::{ContentFade, SwapFrame, SwapTimeline, WheelSlide};

//! Input adapters: pure mappings from raw UI events to navigation requests
//!
//! Adapters never inspect navigation state; the engine alone decides whether
//! a request is accepted.

use crate::navigation::{NavDirection, NavRequest};

/// Map a pressed key to a navigation request. Left and up step backward,
/// right and down step forward, everything else is ignored.
pub fn request_for_key(key: egui::Key) -> Option<NavRequest> {
    match key {
        egui::Key::ArrowLeft | egui::Key::ArrowUp => Some(NavRequest::Step(NavDirection::Prev)),
        egui::Key::ArrowRight | egui::Key::ArrowDown => {
            Some(NavRequest::Step(NavDirection::Next))
        }
        _ => None,
    }
}

/// Map a wheel tick to a single step, ignoring magnitude. egui reports a
/// negative y delta when the user scrolls down, which advances the wheel.
pub fn request_for_scroll(delta_y: f32) -> Option<NavRequest> {
    if delta_y < 0.0 {
        Some(NavRequest::Step(NavDirection::Next))
    } else if delta_y > 0.0 {
        Some(NavRequest::Step(NavDirection::Prev))
    } else {
        None
    }
}

/// Map a click on an entry to a direct selection of its index
pub fn request_for_click(index: usize) -> NavRequest {
    NavRequest::Select(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_steps() {
        assert_eq!(
            request_for_key(egui::Key::ArrowLeft),
            Some(NavRequest::Step(NavDirection::Prev))
        );
        assert_eq!(
            request_for_key(egui::Key::ArrowUp),
            Some(NavRequest::Step(NavDirection::Prev))
        );
        assert_eq!(
            request_for_key(egui::Key::ArrowRight),
            Some(NavRequest::Step(NavDirection::Next))
        );
        assert_eq!(
            request_for_key(egui::Key::ArrowDown),
            Some(NavRequest::Step(NavDirection::Next))
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(request_for_key(egui::Key::Enter), None);
        assert_eq!(request_for_key(egui::Key::Space), None);
        assert_eq!(request_for_key(egui::Key::A), None);
    }

    #[test]
    fn test_scroll_direction_mapping() {
        // Scrolling down (negative delta) advances
        assert_eq!(
            request_for_scroll(-3.0),
            Some(NavRequest::Step(NavDirection::Next))
        );
        assert_eq!(
            request_for_scroll(48.0),
            Some(NavRequest::Step(NavDirection::Prev))
        );
        assert_eq!(request_for_scroll(0.0), None);
    }

    #[test]
    fn test_scroll_magnitude_is_one_step() {
        // A violent fling is still a single step
        assert_eq!(request_for_scroll(-500.0), request_for_scroll(-1.0));
    }

    #[test]
    fn test_click_selects_index() {
        assert_eq!(request_for_click(3), NavRequest::Select(3));
    }
}

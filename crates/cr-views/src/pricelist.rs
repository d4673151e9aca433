//! Pricelist wheel picker
//!
//! Left: a vertical wheel of package names; wheel ticks and clicks drive the
//! shared navigation engine (lock-only variant, no throttle window), and the
//! wheel position slides toward the committed index with an eased glide.
//! Right: the selected package's price and features, swapped with the
//! content fade, above the terms notes.

use crate::{empty_screen, error_screen, loading_screen, style, Section, SiteContext};
use cr_content::{LoadState, PricingPackage};
use cr_core::input::{request_for_click, request_for_scroll};
use cr_core::{ContentFade, NavConfig, NavRequest, NavigationEngine, WheelSlide};
use egui::{pos2, vec2, Align2, FontId, Rect, RichText, Sense};
use tracing::debug;

/// Vertical distance between wheel entries, points
const ITEM_SPACING: f32 = 90.0;

/// Opacity and scale falloff for a wheel entry by distance from the
/// current position
pub(crate) fn item_style(distance: usize) -> (f32, f32) {
    match distance {
        0 => (1.0, 1.1),
        1 => (0.5, 1.0),
        2 => (0.15, 0.95),
        _ => (0.0, 0.9),
    }
}

/// The pricelist section view
pub struct PricelistSection {
    engine: NavigationEngine,
    slide: WheelSlide,
    fade: ContentFade,
    shown: Option<usize>,
    pending: Option<usize>,
    synced_len: Option<usize>,
}

impl PricelistSection {
    pub fn new() -> Self {
        Self {
            engine: NavigationEngine::new(0, NavConfig::lock_only()),
            slide: WheelSlide::settled_at(0),
            fade: ContentFade::immediate(),
            shown: None,
            pending: None,
            synced_len: None,
        }
    }

    fn sync_catalog(&mut self, len: usize) {
        self.engine.set_catalog_len(len);
        self.synced_len = Some(len);
        self.slide = WheelSlide::settled_at(0);
        self.fade = ContentFade::immediate();
        self.shown = None;
        self.pending = if len > 0 { Some(0) } else { None };
    }

    fn submit(&mut self, request: NavRequest) {
        if let Some(transition) = self.engine.request(request) {
            debug!(to = transition.event.to, "package transition accepted");
            self.slide.retarget(transition.event.to, transition.guard);
            self.pending = Some(transition.event.to);
            self.fade = ContentFade::new();
        }
    }

    /// Commit the pending detail content once its fade-out has finished
    fn tick_details(&mut self, dt: f32) {
        self.fade.tick(dt);
        if let Some(next) = self.pending {
            if self.fade.ready_to_swap() {
                self.shown = Some(next);
                self.pending = None;
            }
        }
    }

    fn show(&mut self, ui: &mut egui::Ui, packages: &[PricingPackage]) {
        if self.synced_len != Some(packages.len()) {
            self.sync_catalog(packages.len());
        }

        let dt = ui.input(|i| i.stable_dt).min(0.1);
        self.tick_details(dt);
        let position = self.slide.tick(dt);

        let settled = self.slide.is_settled()
            && self.pending.is_none()
            && self
                .shown
                .map(|i| {
                    self.fade
                        .is_finished(detail_element_count(packages.get(i)))
                })
                .unwrap_or(true);
        if !settled {
            ui.ctx().request_repaint();
        }

        ui.columns(2, |cols| {
            self.picker_column(&mut cols[0], packages, position);
            self.details_column(&mut cols[1], packages);
        });
    }

    fn picker_column(
        &mut self,
        ui: &mut egui::Ui,
        packages: &[PricingPackage],
        position: f32,
    ) {
        ui.add_space(24.0);
        ui.label(
            RichText::new("Pick Your Packages")
                .size(26.0)
                .strong()
                .color(style::text_color()),
        );
        ui.add_space(12.0);

        let height = (ui.available_height() - 16.0).max(ITEM_SPACING * 3.0);
        let (rect, response) =
            ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());

        // Wheel adapter: one step per tick, magnitude ignored
        if response.hovered() {
            let scroll_y = ui.input(|i| i.scroll_delta.y);
            if let Some(request) = request_for_scroll(scroll_y) {
                self.submit(request);
            }
        }

        let painter = ui.painter_at(rect);
        let center_y = rect.center().y;
        let mut clicked = None;

        for (index, package) in packages.iter().enumerate() {
            let offset = index as f32 - position;
            let distance = offset.abs().round() as usize;
            let (opacity, scale) = item_style(distance);
            if opacity <= 0.0 {
                continue;
            }

            let y = center_y + offset * ITEM_SPACING;
            let entry_rect = Rect::from_center_size(
                pos2(rect.center().x, y),
                vec2(rect.width(), ITEM_SPACING * 0.8),
            );

            let color = if distance == 0 {
                style::faded(style::accent_color(), opacity)
            } else {
                style::faded(style::text_color(), opacity)
            };
            painter.text(
                pos2(rect.center().x, y),
                Align2::CENTER_CENTER,
                &package.name,
                FontId::proportional(24.0 * scale),
                color,
            );

            // Explicit selection: clicking an entry jumps straight to it
            let entry = ui.interact(
                entry_rect.intersect(rect),
                ui.id().with("picker_entry").with(index),
                Sense::click(),
            );
            if entry.clicked() {
                clicked = Some(index);
            }
        }

        if let Some(index) = clicked {
            self.submit(request_for_click(index));
        }
    }

    fn details_column(&mut self, ui: &mut egui::Ui, packages: &[PricingPackage]) {
        let Some(index) = self.shown else {
            return;
        };
        let Some(package) = packages.get(index) else {
            return;
        };

        let fading_out = self.pending.is_some();
        let alpha_of = |element: usize| {
            if fading_out {
                self.fade.out_alpha()
            } else {
                self.fade.element_alpha(element)
            }
        };

        ui.add_space(24.0);
        ui.label(
            RichText::new(&package.price.display)
                .size(40.0)
                .strong()
                .color(style::faded(style::accent_color(), alpha_of(0))),
        );
        if package.popular {
            ui.label(
                RichText::new("Most popular")
                    .small()
                    .color(style::faded(style::accent_color(), alpha_of(0))),
            );
        }

        ui.add_space(16.0);
        for (row, feature) in package.features.iter().enumerate() {
            ui.label(
                RichText::new(format!("•  {feature}"))
                    .color(style::faded(style::text_color(), alpha_of(1 + row))),
            );
            ui.add_space(4.0);
        }

        ui.add_space(24.0);
        for note in [
            "*Terms and conditions apply. Kindly contact us for custom projects.",
            "*50% upfront payment required, with the remaining balance upon delivery.",
            "*Standard delivery time is 7–14 working days depending on complexity.",
        ] {
            ui.label(RichText::new(note).small().color(style::muted_color()));
        }
    }
}

impl Default for PricelistSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for PricelistSection {
    fn title(&self) -> &str {
        "Pricelist"
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &SiteContext) {
        match ctx.pricelist.get() {
            LoadState::Loading => loading_screen(ui, "pricing information"),
            LoadState::Failed(message) => error_screen(ui, "Failed to load pricing", &message),
            LoadState::Empty => empty_screen(
                ui,
                "No packages available",
                "Contact us for a custom quote.",
            ),
            LoadState::Ready(packages) => self.show(ui, ctx_packages(&packages)),
        }
    }

    fn teardown(&mut self) {
        // Settle the glide so the lock never outlives the view
        self.slide.settle_now();
        self.pending = None;
    }
}

/// Borrow the packages slice out of the shared catalog
fn ctx_packages(packages: &std::sync::Arc<Vec<PricingPackage>>) -> &[PricingPackage] {
    packages.as_slice()
}

/// Number of staggered elements in the detail pane for a package
fn detail_element_count(package: Option<&PricingPackage>) -> usize {
    1 + package.map(|p| p.features.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cr_content::Price;
    use cr_core::timeline::{FADE_OUT_SECS, WHEEL_SLIDE_SECS};
    use cr_core::NavDirection;

    fn package(name: &str) -> PricingPackage {
        PricingPackage {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            features: vec!["Mixing".to_string(), "Mastering".to_string()],
            price: Price {
                amount: 1.0,
                currency: "IDR".to_string(),
                display: format!("IDR {name}"),
            },
            popular: false,
        }
    }

    #[test]
    fn test_item_style_falloff() {
        assert_eq!(item_style(0), (1.0, 1.1));
        assert_eq!(item_style(1), (0.5, 1.0));
        assert_eq!(item_style(2), (0.15, 0.95));
        assert_eq!(item_style(3), (0.0, 0.9));
        assert_eq!(item_style(7), (0.0, 0.9));
    }

    #[test]
    fn test_wheel_step_commits_after_glide() {
        let mut section = PricelistSection::new();
        section.sync_catalog(4);

        let request = request_for_scroll(-30.0).unwrap();
        assert_eq!(request, NavRequest::Step(NavDirection::Next));
        section.submit(request);
        assert!(section.engine.context().is_transitioning);

        section.slide.tick(WHEEL_SLIDE_SECS);
        let ctx = section.engine.context();
        assert!(!ctx.is_transitioning);
        assert_eq!(ctx.current_index, 1);
    }

    #[test]
    fn test_click_jumps_directly() {
        let mut section = PricelistSection::new();
        section.sync_catalog(6);

        section.submit(NavRequest::Select(3));
        assert_eq!(section.slide.target(), 3.0);
        section.slide.tick(WHEEL_SLIDE_SECS);
        assert_eq!(section.engine.context().current_index, 3);
    }

    #[test]
    fn test_details_swap_follows_fade() {
        let mut section = PricelistSection::new();
        section.sync_catalog(3);
        section.tick_details(0.0);
        assert_eq!(section.shown, Some(0));

        section.submit(NavRequest::Select(2));
        section.tick_details(FADE_OUT_SECS / 2.0);
        assert_eq!(section.shown, Some(0), "old details until fade-out ends");

        section.tick_details(FADE_OUT_SECS);
        assert_eq!(section.shown, Some(2));
    }

    #[test]
    fn test_teardown_midglide_releases_lock() {
        let mut section = PricelistSection::new();
        section.sync_catalog(4);

        section.submit(NavRequest::Select(2));
        section.slide.tick(WHEEL_SLIDE_SECS / 2.0);
        assert!(section.engine.context().is_transitioning);

        section.teardown();
        let ctx = section.engine.context();
        assert!(!ctx.is_transitioning);
        assert_eq!(ctx.current_index, 2);
    }

    #[test]
    fn test_detail_element_count() {
        let p = package("Single");
        assert_eq!(detail_element_count(Some(&p)), 3);
        assert_eq!(detail_element_count(None), 1);
    }
}

//! Shared colors and text helpers for the section views

use egui::{Color32, RichText};

/// Brand accent, the label's signature yellow
pub fn accent_color() -> Color32 {
    Color32::from_rgb(255, 217, 0)
}

/// Primary text color
pub fn text_color() -> Color32 {
    Color32::from_rgb(230, 230, 230)
}

/// Secondary text color
pub fn muted_color() -> Color32 {
    Color32::from_rgb(150, 150, 150)
}

/// Error text color
pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

/// Panel fill behind cards and embed rows
pub fn card_fill() -> Color32 {
    Color32::from_rgb(24, 24, 24)
}

/// A color faded toward transparent by `alpha` in 0..=1
pub fn faded(color: Color32, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// Muted secondary text
pub fn muted_text(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(muted_color())
}

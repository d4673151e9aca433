//! Landing section: the brand tagline with its per-character flicker

use crate::{style, Section, SiteContext};
use cr_content::LoadState;
use egui::RichText;

/// Seconds a character takes to settle once its flicker begins
const FLICKER_SETTLE_SECS: f32 = 0.6;
/// Upper bound of the per-character start delay, seconds
const FLICKER_MAX_DELAY_SECS: f32 = 3.0;

/// The landing section view
pub struct LandingSection {
    /// Time since mount, drives the flicker
    time: f32,
    /// Per-mount seed so the flicker pattern differs between visits but is
    /// stable within one
    seed: u64,
}

impl LandingSection {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            seed: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(1),
        }
    }

    #[cfg(test)]
    fn with_seed(seed: u64) -> Self {
        Self { time: 0.0, seed }
    }

    fn tagline(&self, ctx: &SiteContext) -> String {
        match ctx.meta.get() {
            LoadState::Ready(meta) => meta.tagline.clone(),
            _ => "Create Music with Essentials.".to_string(),
        }
    }
}

impl Default for LandingSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for LandingSection {
    fn title(&self) -> &str {
        "Home"
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &SiteContext) {
        self.time += ui.input(|i| i.stable_dt).min(0.1);
        if self.time < FLICKER_MAX_DELAY_SECS + FLICKER_SETTLE_SECS {
            ui.ctx().request_repaint();
        }

        let tagline = self.tagline(ctx);
        ui.add_space(ui.available_height() * 0.3);

        // One flickering character per span, split across two lines
        for (line_no, line) in split_tagline(&tagline).iter().enumerate() {
            ui.horizontal(|ui| {
                ui.add_space(ui.available_width() * 0.18);
                ui.spacing_mut().item_spacing.x = 0.0;
                for (i, ch) in line.chars().enumerate() {
                    let char_index = line_no * 64 + i;
                    let alpha = flicker_alpha(self.seed, char_index, self.time);
                    ui.label(
                        RichText::new(ch.to_string())
                            .size(54.0)
                            .strong()
                            .color(style::faded(style::accent_color(), alpha)),
                    );
                }
            });
        }
    }

    fn teardown(&mut self) {
        // Restart the flicker on the next visit
        self.time = 0.0;
    }
}

/// Split the tagline into two display lines at the word boundary nearest
/// the middle
fn split_tagline(tagline: &str) -> Vec<String> {
    let words: Vec<&str> = tagline.split_whitespace().collect();
    if words.len() < 2 {
        return vec![tagline.to_string()];
    }
    let mid = words.len().div_ceil(2);
    vec![words[..mid].join(" "), words[mid..].join(" ")]
}

/// Deterministic per-character start delay in `[0, FLICKER_MAX_DELAY_SECS)`
fn char_delay(seed: u64, char_index: usize) -> f32 {
    let hash = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(char_index as u64)
        .wrapping_mul(1442695040888963407);
    let unit = (hash >> 33) as f32 / (1u64 << 31) as f32;
    unit * FLICKER_MAX_DELAY_SECS
}

/// Opacity of a character at `time` since mount: invisible before its
/// delay, strobing while it settles, fully lit afterwards
fn flicker_alpha(seed: u64, char_index: usize, time: f32) -> f32 {
    let phase = time - char_delay(seed, char_index);
    if phase < 0.0 {
        return 0.0;
    }
    if phase >= FLICKER_SETTLE_SECS {
        return 1.0;
    }
    // Strobe between dim and lit, biased brighter as it settles
    let strobe = ((phase * 40.0 + char_index as f32).sin() * 0.5 + 0.5) * 0.7;
    let settle = phase / FLICKER_SETTLE_SECS;
    (strobe + settle).clamp(0.1, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tagline_two_lines() {
        let lines = split_tagline("Create Music with Essentials.");
        assert_eq!(lines, vec!["Create Music", "with Essentials."]);
        assert_eq!(split_tagline("One"), vec!["One"]);
    }

    #[test]
    fn test_char_delay_deterministic_and_bounded() {
        for i in 0..64 {
            let d1 = char_delay(42, i);
            let d2 = char_delay(42, i);
            assert_eq!(d1, d2);
            assert!((0.0..FLICKER_MAX_DELAY_SECS).contains(&d1));
        }
        // Different seeds shuffle the delays
        assert_ne!(char_delay(1, 0), char_delay(2, 0));
    }

    #[test]
    fn test_flicker_settles_fully_lit() {
        let section = LandingSection::with_seed(7);
        let t = FLICKER_MAX_DELAY_SECS + FLICKER_SETTLE_SECS;
        for i in 0..32 {
            assert_eq!(flicker_alpha(section.seed, i, t), 1.0);
        }
    }

    #[test]
    fn test_flicker_dark_before_delay() {
        // A character with a late delay stays dark early on
        let mut found = false;
        for i in 0..64 {
            if char_delay(9, i) > 1.0 {
                assert_eq!(flicker_alpha(9, i, 0.5), 0.0);
                found = true;
                break;
            }
        }
        assert!(found, "some character should start later than 1s");
    }
}

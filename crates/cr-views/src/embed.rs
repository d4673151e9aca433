//! Embedded release players and their teardown contract

use crate::style;
use egui::{Color32, Rounding, Stroke, Vec2};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Lifecycle state of an embedded player row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedState {
    /// Prefetch in flight; the row shows a skeleton
    Loading,
    Ready,
    Failed,
    /// Torn down; the row must never be shown again
    Detached,
}

/// An embedded release player row.
///
/// Each embed owns its prefetch task. Swapping artists must `detach` embeds
/// before discarding them so no background work outlives the row; hiding an
/// embed is not enough. `Drop` detaches as a backstop.
pub struct TrackEmbed {
    url: String,
    state: Arc<RwLock<EmbedState>>,
    task: Option<JoinHandle<()>>,
}

impl TrackEmbed {
    /// Spawn the prefetch for an embed URL
    pub fn spawn(runtime: &tokio::runtime::Handle, url: String) -> Self {
        let state = Arc::new(RwLock::new(EmbedState::Loading));
        let task_state = Arc::clone(&state);
        let task = runtime.spawn(async move {
            // Stand-in for the player handshake; the skeleton shows until
            // this settles
            tokio::time::sleep(Duration::from_millis(400)).await;
            let mut state = task_state.write();
            if *state == EmbedState::Loading {
                *state = EmbedState::Ready;
            }
        });

        Self {
            url,
            state,
            task: Some(task),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> EmbedState {
        *self.state.read()
    }

    pub fn is_detached(&self) -> bool {
        self.state() == EmbedState::Detached
    }

    /// Abort outstanding work and mark the embed dead
    pub fn detach(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        *self.state.write() = EmbedState::Detached;
    }

    /// Draw the embed row: a skeleton while loading, the player card once
    /// ready. `alpha` comes from the detail-pane fade.
    pub fn ui(&self, ui: &mut egui::Ui, alpha: f32) {
        let state = self.state();
        if state == EmbedState::Detached {
            return;
        }

        egui::Frame::none()
            .fill(style::faded(style::card_fill(), alpha))
            .stroke(Stroke::new(1.0, style::faded(Color32::from_rgb(45, 45, 45), alpha)))
            .rounding(Rounding::same(6.0))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    // Album art placeholder
                    let (rect, _) =
                        ui.allocate_exact_size(Vec2::splat(48.0), egui::Sense::hover());
                    let art_color = match state {
                        EmbedState::Ready => style::faded(style::accent_color(), alpha * 0.8),
                        _ => style::faded(Color32::from_rgb(50, 50, 50), alpha),
                    };
                    ui.painter().rect_filled(rect, Rounding::same(4.0), art_color);

                    ui.add_space(8.0);
                    ui.vertical(|ui| match state {
                        EmbedState::Loading => {
                            skeleton_bar(ui, 140.0, alpha);
                            skeleton_bar(ui, 90.0, alpha);
                        }
                        EmbedState::Ready => {
                            ui.label(
                                egui::RichText::new(track_label(&self.url))
                                    .color(style::faded(style::text_color(), alpha)),
                            );
                            ui.hyperlink_to(
                                egui::RichText::new("Open in player").small(),
                                self.url.clone(),
                            );
                        }
                        EmbedState::Failed => {
                            ui.label(
                                egui::RichText::new("Track unavailable")
                                    .color(style::faded(style::error_color(), alpha)),
                            );
                        }
                        EmbedState::Detached => {}
                    });
                });
            });
    }
}

impl Drop for TrackEmbed {
    fn drop(&mut self) {
        if !self.is_detached() {
            debug!(url = %self.url, "embed dropped without detach");
            self.detach();
        }
    }
}

/// Shimmering placeholder line for a loading embed
fn skeleton_bar(ui: &mut egui::Ui, width: f32, alpha: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 10.0), egui::Sense::hover());
    ui.painter().rect_filled(
        rect,
        Rounding::same(3.0),
        style::faded(Color32::from_rgb(55, 55, 55), alpha),
    );
}

/// Short display label derived from the embed URL
fn track_label(url: &str) -> String {
    url.rsplit('/')
        .next()
        .filter(|tail| !tail.is_empty())
        .unwrap_or("Track")
        .to_string()
}

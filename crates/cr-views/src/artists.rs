//! Artist showcase carousel
//!
//! Left pane: detail content (name, bio, socials, latest releases) driven by
//! the content-swap fade. Right pane: the showcase image driven by the
//! two-phase swap timeline. Both are choreographed by the shared navigation
//! engine; input never touches the index or the lock directly.

use crate::embed::TrackEmbed;
use crate::{empty_screen, error_screen, loading_screen, style, Section, SiteContext};
use cr_content::{Artist, LoadState};
use cr_core::input::request_for_key;
use cr_core::{
    ContentFade, NavConfig, NavDirection, NavRequest, NavigationEngine, SwapTimeline,
    TransitionEvent,
};
use egui::{vec2, Button, Color32, Key, Rect, RichText, Sense};
use tracing::debug;

/// An in-flight image swap and the event that started it
struct ActiveSwap {
    event: TransitionEvent,
    timeline: SwapTimeline,
}

/// The artists section view
pub struct ArtistsSection {
    engine: NavigationEngine,
    swap: Option<ActiveSwap>,
    details: ArtistDetails,
    synced_len: Option<usize>,
}

impl ArtistsSection {
    pub fn new() -> Self {
        Self {
            engine: NavigationEngine::new(0, NavConfig::default()),
            swap: None,
            details: ArtistDetails::new(),
            synced_len: None,
        }
    }

    /// Bind the engine to a (re)supplied catalog
    fn sync_catalog(&mut self, len: usize) {
        self.engine.set_catalog_len(len);
        self.synced_len = Some(len);
        self.swap = None;
        self.details.reset();
        if len > 0 {
            self.details.begin(0, true);
        }
    }

    /// Funnel a navigation request through the engine; on acceptance, start
    /// both the image swap and the content swap
    fn submit(&mut self, request: NavRequest) {
        if let Some(transition) = self.engine.request(request) {
            debug!(to = transition.event.to, "artist transition accepted");
            self.details.begin(transition.event.to, false);
            self.swap = Some(ActiveSwap {
                event: transition.event,
                timeline: SwapTimeline::new(transition.event.direction, transition.guard),
            });
        }
    }

    fn show(&mut self, ui: &mut egui::Ui, ctx: &SiteContext, artists: &[Artist]) {
        if self.synced_len != Some(artists.len()) {
            self.sync_catalog(artists.len());
        }

        let dt = ui.input(|i| i.stable_dt).min(0.1);

        // Keyboard adapter
        for key in [Key::ArrowLeft, Key::ArrowRight, Key::ArrowUp, Key::ArrowDown] {
            if ui.input(|i| i.key_pressed(key)) {
                if let Some(request) = request_for_key(key) {
                    self.submit(request);
                }
            }
        }

        self.details.tick(dt, artists, &ctx.runtime);

        if self.swap.is_some() || !self.details.settled(artists) {
            ui.ctx().request_repaint();
        }

        ui.columns(2, |cols| {
            self.details.ui(&mut cols[0], artists);
            self.image_panel(&mut cols[1], ctx, artists, dt);
        });
    }

    fn image_panel(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &SiteContext,
        artists: &[Artist],
        dt: f32,
    ) {
        let height = (ui.available_height() - 56.0).max(220.0);
        let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());

        let mut finished = false;
        if let Some(active) = &mut self.swap {
            let frame = active.timeline.tick(dt);
            paint_artist_image(
                ui,
                ctx,
                artists,
                active.event.from,
                rect,
                frame.exit_offset(),
                frame.exit_alpha(),
            );
            paint_artist_image(
                ui,
                ctx,
                artists,
                active.event.to,
                rect,
                frame.enter_offset(),
                frame.enter_alpha(),
            );
            finished = frame.finished;
        } else {
            let current = self.engine.context().current_index;
            paint_artist_image(ui, ctx, artists, current, rect, 0.0, 1.0);
        }
        if finished {
            self.swap = None;
        }

        // Prev / next controls, disabled while a transition is in flight
        let transitioning = self.engine.context().is_transitioning;
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 40.0);
            if ui
                .add_enabled(!transitioning, Button::new(RichText::new("‹").size(20.0)))
                .clicked()
            {
                self.submit(NavRequest::Step(NavDirection::Prev));
            }
            if ui
                .add_enabled(!transitioning, Button::new(RichText::new("›").size(20.0)))
                .clicked()
            {
                self.submit(NavRequest::Step(NavDirection::Next));
            }
        });
    }
}

impl Default for ArtistsSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for ArtistsSection {
    fn title(&self) -> &str {
        "Artists & Releases"
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &SiteContext) {
        match ctx.artists.get() {
            LoadState::Loading => loading_screen(ui, "artists"),
            LoadState::Failed(message) => {
                error_screen(ui, "Failed to load artists", &message);
            }
            LoadState::Empty => empty_screen(
                ui,
                "No artists found",
                "Check back later for artist updates.",
            ),
            LoadState::Ready(artists) => self.show(ui, ctx, &artists),
        }
    }

    fn teardown(&mut self) {
        // Dropping the swap settles its guard; the lock never outlives the view
        self.swap = None;
        self.details.reset();
    }
}

/// Paint one showcase image, offset horizontally by a fraction of the panel
/// width and faded by `alpha`, clipped to the panel
fn paint_artist_image(
    ui: &mut egui::Ui,
    ctx: &SiteContext,
    artists: &[Artist],
    index: usize,
    rect: Rect,
    offset: f32,
    alpha: f32,
) {
    if alpha <= 0.0 {
        return;
    }
    let Some(artist) = artists.get(index) else {
        return;
    };

    let uri = format!("file://{}", ctx.data_dir.join(&artist.image).display());
    let target = rect.translate(vec2(offset * rect.width(), 0.0));
    let mut child = ui.child_ui(rect, egui::Layout::default());
    child.set_clip_rect(rect);
    egui::Image::from_uri(uri)
        .tint(style::faded(Color32::WHITE, alpha))
        .paint_at(&mut child, target);
}

/// Detail pane state: which artist is mounted, the swap fade, and the
/// embed rows owned by the mounted artist
struct ArtistDetails {
    shown: Option<usize>,
    pending: Option<usize>,
    fade: ContentFade,
    embeds: Vec<TrackEmbed>,
}

impl ArtistDetails {
    fn new() -> Self {
        Self {
            shown: None,
            pending: None,
            fade: ContentFade::immediate(),
            embeds: Vec::new(),
        }
    }

    /// Detach all embeds and forget the mounted artist
    fn reset(&mut self) {
        self.detach_all();
        self.shown = None;
        self.pending = None;
        self.fade = ContentFade::immediate();
    }

    fn detach_all(&mut self) {
        for embed in &mut self.embeds {
            embed.detach();
        }
        self.embeds.clear();
    }

    /// Queue a content swap toward `index`. With `immediate`, the fade-out
    /// is skipped (first mount, nothing to fade)
    fn begin(&mut self, index: usize, immediate: bool) {
        self.pending = Some(index);
        self.fade = if immediate {
            ContentFade::immediate()
        } else {
            ContentFade::new()
        };
    }

    /// Advance the fade; once the fade-out completes, detach the old
    /// embeds and mount the pending artist's content
    fn tick(&mut self, dt: f32, artists: &[Artist], runtime: &tokio::runtime::Handle) {
        self.fade.tick(dt);

        if let Some(next) = self.pending {
            if self.fade.ready_to_swap() {
                self.detach_all();
                if let Some(artist) = artists.get(next) {
                    self.embeds = artist
                        .tracks
                        .iter()
                        .map(|url| TrackEmbed::spawn(runtime, url.clone()))
                        .collect();
                }
                self.shown = Some(next);
                self.pending = None;
            }
        }
    }

    /// Whether the pane has fully settled (nothing left to animate)
    fn settled(&self, artists: &[Artist]) -> bool {
        if self.pending.is_some() {
            return false;
        }
        match self.shown {
            Some(index) => self.fade.is_finished(element_count(artists.get(index))),
            None => true,
        }
    }

    fn ui(&self, ui: &mut egui::Ui, artists: &[Artist]) {
        let Some(index) = self.shown else {
            return;
        };
        let Some(artist) = artists.get(index) else {
            return;
        };

        // During fade-out the whole pane dims together; afterwards elements
        // settle in one by one
        let fading_out = self.pending.is_some();
        let alpha_of = |element: usize| {
            if fading_out {
                self.fade.out_alpha()
            } else {
                self.fade.element_alpha(element)
            }
        };
        let offset_of = |element: usize| {
            if fading_out {
                0.0
            } else {
                self.fade.element_offset(element) * 0.3
            }
        };

        ui.add_space(24.0);

        ui.add_space(offset_of(0));
        ui.label(
            RichText::new(&artist.name)
                .size(32.0)
                .strong()
                .color(style::faded(style::text_color(), alpha_of(0))),
        );

        ui.add_space(12.0 + offset_of(1));
        ui.label(
            RichText::new(&artist.bio).color(style::faded(style::text_color(), alpha_of(1))),
        );

        ui.add_space(12.0 + offset_of(2));
        ui.horizontal(|ui| {
            let link_color = style::faded(style::accent_color(), alpha_of(2));
            for (label, url) in [
                ("Instagram", &artist.socials.instagram),
                ("Spotify", &artist.socials.spotify),
                ("YouTube", &artist.socials.youtube),
            ] {
                if let Some(url) = url {
                    ui.hyperlink_to(RichText::new(label).color(link_color), url.clone());
                    ui.add_space(8.0);
                }
            }
        });

        if !self.embeds.is_empty() {
            ui.add_space(20.0 + offset_of(3));
            ui.label(
                RichText::new("Latest Releases")
                    .small()
                    .color(style::faded(style::muted_color(), alpha_of(3))),
            );
            ui.add_space(6.0);

            for (row, embed) in self.embeds.iter().enumerate() {
                embed.ui(ui, alpha_of(4 + row));
                ui.add_space(6.0);
            }
        }
    }
}

/// Number of staggered elements in the pane for an artist
fn element_count(artist: Option<&Artist>) -> usize {
    4 + artist.map(|a| a.tracks.len()).unwrap_or(0)
}

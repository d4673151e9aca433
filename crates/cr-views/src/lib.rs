//! Section views for the Crescentials experience
//!
//! Each page section is a self-contained view implementing [`Section`]:
//! it renders from the shared [`SiteContext`] and owns its animations and
//! embedded media, with an explicit teardown lifecycle.

pub mod about;
pub mod artists;
pub mod contact;
pub mod embed;
pub mod landing;
pub mod pricelist;
pub mod style;

pub use about::AboutSection;
pub use artists::ArtistsSection;
pub use contact::ContactSection;
pub use embed::{EmbedState, TrackEmbed};
pub use landing::LandingSection;
pub use pricelist::PricelistSection;

use cr_content::{Artist, ContactInfo, PricingPackage, SharedLoad, SiteMeta};
use std::path::PathBuf;

/// Shared context handed to every section each frame
#[derive(Clone)]
pub struct SiteContext {
    pub artists: SharedLoad<Vec<Artist>>,
    pub pricelist: SharedLoad<Vec<PricingPackage>>,
    pub contact: SharedLoad<ContactInfo>,
    pub meta: SharedLoad<SiteMeta>,

    /// Root of the content directory, for resolving image paths
    pub data_dir: PathBuf,

    /// Runtime handle for embed prefetch tasks
    pub runtime: tokio::runtime::Handle,
}

/// Base trait for the page sections hosted by the shell
pub trait Section {
    /// Display title of the section
    fn title(&self) -> &str;

    /// Draw the section for one frame
    fn ui(&mut self, ui: &mut egui::Ui, ctx: &SiteContext);

    /// Explicit lifecycle teardown: settle in-flight animations and detach
    /// embedded media. Called by the shell when the section is swapped out;
    /// the section must be renderable again afterwards.
    fn teardown(&mut self);
}

/// Placeholder screen while a catalog is loading
pub fn loading_screen(ui: &mut egui::Ui, what: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.spinner();
        ui.add_space(12.0);
        ui.label(style::muted_text(format!("Loading {what}...")));
    });
}

/// Placeholder screen for a failed catalog load
pub fn error_screen(ui: &mut egui::Ui, title: &str, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.colored_label(style::error_color(), title);
        ui.add_space(8.0);
        ui.label(style::muted_text(message.to_string()));
    });
}

/// Placeholder screen for an empty catalog
pub fn empty_screen(ui: &mut egui::Ui, title: &str, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.heading(title);
        ui.add_space(8.0);
        ui.label(style::muted_text(message.to_string()));
    });
}

//! About section: the label story

use crate::{style, Section, SiteContext};
use cr_content::{LoadState, SiteMeta};
use egui::RichText;

/// The about section view
#[derive(Default)]
pub struct AboutSection;

impl AboutSection {
    pub fn new() -> Self {
        Self
    }
}

/// Paragraphs of the label story, with metadata folded into the opener
fn story_paragraphs(meta: &SiteMeta) -> Vec<String> {
    let opener = match meta.established {
        Some(year) => format!(
            "{} is an independent record label founded in {}, built on one \
             conviction: great music starts with the essentials.",
            meta.title, year
        ),
        None => format!(
            "{} is an independent record label built on one conviction: \
             great music starts with the essentials.",
            meta.title
        ),
    };

    let mut paragraphs = vec![opener];
    if !meta.description.is_empty() {
        paragraphs.push(meta.description.clone());
    }
    paragraphs.push(
        "We keep our roster small and our attention whole. Every release \
         gets the same treatment, from the first writing session through \
         mixing, mastering, and the artwork that carries it out the door."
            .to_string(),
    );
    paragraphs.push(
        "Whether you are an artist looking for a home or a listener looking \
         for something honest, you are in the right place."
            .to_string(),
    );
    paragraphs
}

impl Section for AboutSection {
    fn title(&self) -> &str {
        "Preambul"
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &SiteContext) {
        let meta = match ctx.meta.get() {
            LoadState::Ready(meta) => (*meta).clone(),
            _ => SiteMeta::default(),
        };

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(640.0);
            ui.label(
                RichText::new("Preambul")
                    .size(34.0)
                    .strong()
                    .color(style::accent_color()),
            );
            if !meta.location.is_empty() {
                ui.label(style::muted_text(meta.location.clone()));
            }
            ui.add_space(24.0);

            for paragraph in story_paragraphs(&meta) {
                ui.label(RichText::new(paragraph).size(16.0).color(style::text_color()));
                ui.add_space(14.0);
            }
        });
    }

    fn teardown(&mut self) {}
}

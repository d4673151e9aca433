//! Contact section: reach-out links and the site footer

use crate::{loading_screen, style, Section, SiteContext};
use cr_content::{ContactInfo, LoadState};
use egui::RichText;

/// The contact section view
#[derive(Default)]
pub struct ContactSection;

impl ContactSection {
    pub fn new() -> Self {
        Self
    }

    fn show(&self, ui: &mut egui::Ui, contact: &ContactInfo) {
        ui.add_space(64.0);
        ui.vertical_centered(|ui| {
            ui.label(style::muted_text("Ready to create?".to_string()));
            ui.add_space(8.0);
            ui.label(
                RichText::new("Let's make music together.")
                    .size(38.0)
                    .strong()
                    .color(style::text_color()),
            );
            ui.add_space(40.0);

            // Direct channels
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 32.0;
                contact_link(ui, "Email", &contact.email, &format!("mailto:{}", contact.email));
                contact_link(ui, "Phone", &contact.phone, &format!("tel:{}", contact.phone));
                if !contact.address.is_empty() {
                    ui.vertical(|ui| {
                        ui.label(style::muted_text("Studio".to_string()));
                        ui.label(RichText::new(&contact.address).color(style::text_color()));
                    });
                }
            });

            ui.add_space(24.0);

            // Social channels
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 24.0;
                for (label, url) in social_links(contact) {
                    ui.hyperlink_to(
                        RichText::new(label).color(style::accent_color()),
                        url,
                    );
                }
            });
        });

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(16.0);
            ui.label(style::muted_text(
                "© 2025 Crescentials Record. All rights reserved.".to_string(),
            ));
        });
    }
}

fn contact_link(ui: &mut egui::Ui, label: &str, text: &str, url: &str) {
    ui.vertical(|ui| {
        ui.label(style::muted_text(label.to_string()));
        ui.hyperlink_to(RichText::new(text).color(style::text_color()), url.to_string());
    });
}

/// Present social platforms in display order
fn social_links(contact: &ContactInfo) -> Vec<(&'static str, String)> {
    let mut links = Vec::new();
    if let Some(url) = &contact.social.instagram {
        links.push(("Instagram", url.clone()));
    }
    if let Some(url) = &contact.social.spotify {
        links.push(("Spotify", url.clone()));
    }
    if let Some(url) = &contact.social.youtube {
        links.push(("YouTube", url.clone()));
    }
    links
}

impl Section for ContactSection {
    fn title(&self) -> &str {
        "Contact"
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &SiteContext) {
        match ctx.contact.get() {
            LoadState::Ready(contact) => self.show(ui, &contact),
            LoadState::Failed(_) | LoadState::Empty => {
                // Fall back to bare branding rather than a dead end
                self.show(ui, &placeholder_contact());
            }
            LoadState::Loading => loading_screen(ui, "contact details"),
        }
    }

    fn teardown(&mut self) {}
}

fn placeholder_contact() -> ContactInfo {
    ContactInfo {
        email: "hello@crescentials.com".to_string(),
        phone: String::new(),
        address: String::new(),
        social: Default::default(),
    }
}

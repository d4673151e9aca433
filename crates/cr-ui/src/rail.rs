//! Top navigation rail
//!
//! The rail holds no state of its own: the active section is stored by the
//! app, and the highlight is a pure projection of that value.

use egui::{Color32, RichText, Stroke};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The page sections, in rail order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionId {
    Home,
    About,
    Artists,
    Pricelist,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Artists,
        SectionId::Pricelist,
        SectionId::Contact,
    ];

    /// Display label in the rail
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "Preambul",
            SectionId::Artists => "Artists & Releases",
            SectionId::Pricelist => "Pricelist",
            SectionId::Contact => "Contact",
        }
    }
}

/// Draw the rail for the given active section. Returns the section the user
/// switched to, if any.
pub fn rail(ui: &mut egui::Ui, active: SectionId) -> Option<SectionId> {
    let mut switched = None;

    ui.horizontal(|ui| {
        ui.add_space(16.0);
        ui.label(
            RichText::new("Crescentials Record")
                .strong()
                .color(crate::theme::accent_color()),
        );
        ui.add_space(24.0);

        for section in SectionId::ALL {
            let is_active = section == active;
            let text = if is_active {
                RichText::new(section.label())
                    .color(crate::theme::accent_color())
                    .underline()
            } else {
                RichText::new(section.label()).color(Color32::from_rgb(200, 200, 200))
            };

            let button = egui::Button::new(text)
                .fill(Color32::TRANSPARENT)
                .stroke(Stroke::NONE);
            if ui.add(button).clicked() && !is_active {
                debug!(from = ?active, to = ?section, "rail switch");
                switched = Some(section);
            }
        }
    });

    switched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rail_order_and_labels() {
        let labels: Vec<&str> = SectionId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Home", "Preambul", "Artists & Releases", "Pricelist", "Contact"]
        );
    }
}

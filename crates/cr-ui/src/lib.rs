//! Shared chrome for the Crescentials site: theme and the navigation rail

pub mod rail;
pub mod theme;

pub use rail::{rail, SectionId};
pub use theme::{apply_theme, Theme};

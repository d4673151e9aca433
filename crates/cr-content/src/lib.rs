//! Content layer for the Crescentials experience
//!
//! Typed models for the site's catalogs (artists, pricing packages, contact
//! details, site metadata), JSON file sources, the load-state machine views
//! render from, and an injected session cache.

pub mod cache;
pub mod model;
pub mod sources;
pub mod state;

use thiserror::Error;

// Re-exports
pub use cache::SessionCache;
pub use model::{Artist, ArtistSocials, ContactInfo, Price, PricingPackage, SiteMeta};
pub use sources::{data_file, CatalogSource, JsonFileSource};
pub use state::{LoadState, SharedLoad};

/// Errors that can occur while loading content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing content: {0}")]
    Missing(String),
}

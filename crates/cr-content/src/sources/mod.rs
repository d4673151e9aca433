pub mod json_source;

pub use json_source::{data_file, JsonFileSource};

use crate::ContentError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// A read-only source of an ordered catalog of items.
///
/// Sources are queried once per view lifecycle; the returned catalog is
/// immutable for the duration of a session.
#[async_trait]
pub trait CatalogSource<T: DeserializeOwned>: Send + Sync {
    /// Load the full catalog, in display order
    async fn load(&self) -> Result<Vec<T>, ContentError>;

    /// The source name/path, used for logging and cache keys
    fn source_name(&self) -> &str;
}

//! JSON file catalog source

use super::CatalogSource;
use crate::{ContentError, SessionCache};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Catalog source backed by a JSON file on disk, with an optional injected
/// session cache for the raw content.
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
    cache: Option<Arc<SessionCache>>,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            path,
            name,
            cache: None,
        }
    }

    /// Attach a session cache; subsequent loads reuse the cached raw text
    pub fn with_cache(mut self, cache: Arc<SessionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    async fn raw_content(&self) -> Result<Arc<str>, ContentError> {
        if let Some(cache) = &self.cache {
            if let Some(content) = cache.get(&self.name) {
                debug!(source = %self.name, "content cache hit");
                return Ok(content);
            }
        }

        if !self.path.exists() {
            return Err(ContentError::Missing(self.path.display().to_string()));
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        if let Some(cache) = &self.cache {
            cache.put(&self.name, &content);
        }
        Ok(Arc::from(content.as_str()))
    }

    /// Load and deserialize a single record (contact info, site metadata)
    pub async fn load_record<T: DeserializeOwned>(&self) -> Result<T, ContentError> {
        let content = self.raw_content().await?;
        let record = serde_json::from_str(&content)?;
        info!(source = %self.name, "record loaded");
        Ok(record)
    }
}

#[async_trait]
impl<T: DeserializeOwned> CatalogSource<T> for JsonFileSource {
    async fn load(&self) -> Result<Vec<T>, ContentError> {
        let content = self.raw_content().await?;
        let items: Vec<T> = serde_json::from_str(&content)?;
        info!(source = %self.name, count = items.len(), "catalog loaded");
        Ok(items)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

/// Convenience constructor for a source inside a data directory
pub fn data_file(data_dir: &Path, file_name: &str) -> JsonFileSource {
    JsonFileSource::new(data_dir.join(file_name))
}

//! Session-scoped content cache
//!
//! An explicit cache object injected into the sources, scoped to one app
//! session. Keyed by source name, storing the raw JSON text so repeated
//! loads within a session skip the filesystem.

use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Raw-content cache shared by the catalog sources for one session
#[derive(Default)]
pub struct SessionCache {
    entries: RwLock<AHashMap<String, Arc<str>>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached raw content for a source
    pub fn get(&self, source_name: &str) -> Option<Arc<str>> {
        self.entries.read().get(source_name).cloned()
    }

    /// Cache the raw content for a source
    pub fn put(&self, source_name: &str, content: &str) {
        self.entries
            .write()
            .insert(source_name.to_string(), Arc::from(content));
    }

    /// Drop all cached content
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

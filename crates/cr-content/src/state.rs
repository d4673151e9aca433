//! Load-state machine surfaced to views

use parking_lot::RwLock;
use std::sync::Arc;

/// State of an asynchronously loaded catalog or record.
///
/// Each state is terminal until the content is (re)supplied; views render
/// `Loading`, `Failed` and `Empty` as distinct placeholder screens.
#[derive(Debug, Clone)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
    Empty,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The loaded value, if ready
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// A load slot shared between the UI thread and the loader task.
///
/// The loader writes exactly once per (re)load; views read a clone each
/// frame. Cloning the slot shares the underlying state.
pub struct SharedLoad<T> {
    inner: Arc<RwLock<LoadState<Arc<T>>>>,
}

impl<T> SharedLoad<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(LoadState::Loading)),
        }
    }

    /// Current state; `Ready` values are shared, not copied
    pub fn get(&self) -> LoadState<Arc<T>> {
        self.inner.read().clone()
    }

    pub fn set(&self, state: LoadState<Arc<T>>) {
        *self.inner.write() = state;
    }

    pub fn set_ready(&self, value: T) {
        self.set(LoadState::Ready(Arc::new(value)));
    }

    pub fn set_failed(&self, message: impl Into<String>) {
        self.set(LoadState::Failed(message.into()));
    }
}

impl<T> SharedLoad<Vec<T>> {
    /// Fold a catalog load result into the slot, mapping empty catalogs to
    /// [`LoadState::Empty`]
    pub fn supply_catalog(&self, result: Result<Vec<T>, crate::ContentError>) {
        let state = match result {
            Ok(items) if items.is_empty() => LoadState::Empty,
            Ok(items) => LoadState::Ready(Arc::new(items)),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        self.set(state);
    }
}

impl<T> SharedLoad<T> {
    /// Fold a single-record load result into the slot
    pub fn supply_record(&self, result: Result<T, crate::ContentError>) {
        match result {
            Ok(value) => self.set_ready(value),
            Err(e) => self.set_failed(e.to_string()),
        }
    }
}

impl<T> Clone for SharedLoad<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedLoad<T> {
    fn default() -> Self {
        Self::new()
    }
}

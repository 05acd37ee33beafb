//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::domain::repositories::UrlStore;
use crate::infrastructure::persistence::InMemoryUrlStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UrlStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UrlStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUrlStore::new()))
    }
}

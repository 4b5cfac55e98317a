//! Application state.

use std::sync::{Arc, Mutex};

use crate::store::PassageStore;

/// Shared state for an embedding host.
pub struct AppState {
    pub store: Arc<Mutex<PassageStore>>,
}

impl AppState {
    pub fn new(store: PassageStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

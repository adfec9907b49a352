//! Shared application state for all routes. Holds only the store handle; no per-request data.

use crate::store::PropertyStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PropertyStore>,
}

impl AppState {
    pub fn new(store: impl PropertyStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

//! Shared application state for all routes.

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    /// Cheap to clone; the pool inside is shared.
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState { store }
    }
}

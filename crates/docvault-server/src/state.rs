use docvault::DocumentStore;

/// Shared state handed to every route. The store is constructed once at
/// startup and injected here; nothing reaches for an ambient global.
pub struct AppState {
    pub store: DocumentStore,
}

impl AppState {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

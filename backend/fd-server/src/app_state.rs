use fd_config::ValidationConfig;
use fd_store::Store;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub validation: ValidationConfig,
}

impl AppState {
    pub fn new(store: Store, validation: ValidationConfig) -> Self {
        Self { store, validation }
    }
}

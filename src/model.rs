//! Shared state handed to every command handler.

use std::sync::Arc;

use crate::database::codes::CodeStore;

/// Built once in `main` and owned by the event handler; handlers borrow it
/// for the duration of one interaction.
pub struct AppState {
    /// Persistent storage for saved codes.
    pub store: Arc<dyn CodeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CodeStore>) -> Self {
        Self { store }
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use ollama_brain::OllamaBrain;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Chat brain.
    pub brain: Arc<OllamaBrain>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, brain: OllamaBrain) -> Self {
        Self {
            db,
            brain: Arc::new(brain),
        }
    }
}

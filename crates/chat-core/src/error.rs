//! Error types for the chat pipeline.

use thiserror::Error;

/// Errors that can occur while driving a chat request.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or transport failure reaching the model backend.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered but the response could not be used.
    #[error("Backend error: {0}")]
    Backend(String),
}

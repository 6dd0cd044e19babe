//! Ollama-backed chat brain with tool calling.
//!
//! This crate drives a local Ollama model through an appointment
//! scheduling conversation: it assembles the message timeline, advertises
//! the registered tools, executes the tool calls the model requests, and
//! loops until the model produces a text reply or the round budget runs
//! out.
//!
//! # Usage
//!
//! ```rust,no_run
//! use agenda_tools::appointment_registry;
//! use database::Database;
//! use ollama_brain::{OllamaBrain, OllamaConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite:agenda.db").await?;
//!     db.migrate().await?;
//!
//!     let config = OllamaConfig::from_env()?;
//!     let brain = OllamaBrain::new(config, appointment_registry(db))?;
//!
//!     let reply = brain.chat("Quiero una cita para el lunes", None, &[]).await;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod client;
mod config;
mod conversation;
mod prompt;

pub use api_types::ModelTurn;
pub use brain::{OllamaBrain, FALLBACK_REPLY};
pub use client::{ChatBackend, OllamaClient};
pub use config::{OllamaConfig, OllamaConfigBuilder};
pub use conversation::build_messages;
pub use prompt::MASTER_PROMPT;

// Re-export chat-core types for convenience
pub use chat_core::{ChatError, ChatMessage, RawArguments, ToolCallRequest, ToolResult};

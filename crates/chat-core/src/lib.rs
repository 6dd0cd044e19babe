//! Shared types for the citas chatbot pipeline.
//!
//! This crate defines the vocabulary the other crates speak:
//!
//! - [`ChatMessage`] - One entry in the conversation timeline sent to the model
//! - [`ToolCallRequest`] / [`RawArguments`] - A tool invocation requested by the model
//! - [`ToolResult`] - Normalized success/error envelope returned to the model
//! - [`ChatError`] - Error type for the chat pipeline
//!
//! It performs no I/O; everything here is plain data.

mod error;
mod message;
mod tools;

pub use error::ChatError;
pub use message::ChatMessage;
pub use tools::{RawArguments, ToolCallRequest, ToolResult};

//! Conversation timeline messages.

use serde::{Deserialize, Serialize};

/// One message in the conversation timeline.
///
/// The timeline is append-only for the duration of a chat request; the
/// model reads it as a linear transcript, so insertion order is
/// semantically significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", "assistant" or "tool".
    pub role: String,
    /// Message content.
    pub content: String,
    /// Id of the originating tool call, for tool-role messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    /// Name of the resolved tool, for tool-role messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
            tool_call_id: None,
            name: None,
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            tool_call_id: None,
            name: None,
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
            tool_call_id: None,
            name: None,
        }
    }

    /// Create a tool-result message.
    ///
    /// `name` must only be set when the tool resolved against the registry;
    /// unresolved calls still produce a tool message, but without a name.
    pub fn tool(
        content: impl Into<String>,
        tool_call_id: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            role: "tool".to_string(),
            content: content.into(),
            tool_call_id,
            name,
        }
    }
}

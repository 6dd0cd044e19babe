//! Ollama chat API request and response types.

use chat_core::{ChatMessage, RawArguments, ToolCallRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat request to the Ollama `/api/chat` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatApiRequest {
    /// Model to use
    pub model: String,
    /// Messages in the conversation
    pub messages: Vec<ChatMessage>,
    /// Whether to stream the response
    pub stream: bool,
    /// Wire declarations of the available tools
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
}

/// Chat response from Ollama.
///
/// Ollama versions differ in where they place the assistant output:
/// current servers nest it under `message`, older ones put `content`
/// and `tool_calls` at the top level, and `/api/generate`-style
/// payloads use a bare `response` string. All fields are optional and
/// [`ChatApiResponse::into_turn`] resolves them in that order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatApiResponse {
    /// Nested assistant message
    pub message: Option<ResponseMessage>,
    /// Top-level content (older servers)
    pub content: Option<String>,
    /// Top-level tool calls (older servers)
    pub tool_calls: Option<Vec<RawToolCall>>,
    /// Legacy generate-style text
    pub response: Option<String>,
}

/// Nested assistant message within a chat response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    /// Content (may be empty if tool calls)
    pub content: Option<String>,
    /// Requested tool calls
    pub tool_calls: Option<Vec<RawToolCall>>,
}

/// A tool call as the model emits it.
///
/// Accepts both the OpenAI-style nested `function` object and the
/// flat `{name, arguments}` form.
#[derive(Debug, Clone, Deserialize)]
pub struct RawToolCall {
    /// Call id, when the server assigns one
    pub id: Option<String>,
    /// Nested function object
    pub function: Option<RawFunctionCall>,
    /// Flat tool name
    pub name: Option<String>,
    /// Flat arguments
    pub arguments: Option<RawArguments>,
}

/// The `function` object inside a nested tool call.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFunctionCall {
    /// Tool name
    pub name: String,
    /// Arguments, as a JSON object or an encoded string
    pub arguments: Option<RawArguments>,
}

impl RawToolCall {
    /// Resolve into a [`ToolCallRequest`], or None if no tool name is present.
    pub fn into_request(self) -> Option<ToolCallRequest> {
        let (name, arguments) = match self.function {
            Some(f) => (f.name, f.arguments),
            None => (self.name?, self.arguments),
        };

        Some(ToolCallRequest {
            id: self.id,
            name,
            arguments: arguments.unwrap_or_default(),
        })
    }
}

/// One assistant turn, normalized from whatever shape the server sent.
#[derive(Debug, Clone)]
pub enum ModelTurn {
    /// The model wants one or more tools executed.
    ToolCalls(Vec<ToolCallRequest>),
    /// The model produced a final text reply.
    Text(String),
    /// The server answered with no usable content.
    Empty,
}

impl ChatApiResponse {
    /// Normalize the response into a single [`ModelTurn`].
    ///
    /// The nested `message` shape wins over the flat one, and tool
    /// calls win over content within a shape. Empty content strings and
    /// empty tool-call lists count as absent.
    pub fn into_turn(self) -> ModelTurn {
        if let Some(message) = self.message {
            if let Some(turn) = resolve(message.tool_calls, message.content) {
                return turn;
            }
        }

        if let Some(turn) = resolve(self.tool_calls, self.content) {
            return turn;
        }

        match self.response {
            Some(text) if !text.is_empty() => ModelTurn::Text(text),
            _ => ModelTurn::Empty,
        }
    }
}

fn resolve(tool_calls: Option<Vec<RawToolCall>>, content: Option<String>) -> Option<ModelTurn> {
    if let Some(calls) = tool_calls {
        let requests: Vec<ToolCallRequest> =
            calls.into_iter().filter_map(RawToolCall::into_request).collect();
        if !requests.is_empty() {
            return Some(ModelTurn::ToolCalls(requests));
        }
    }

    match content {
        Some(text) if !text.is_empty() => Some(ModelTurn::Text(text)),
        _ => None,
    }
}

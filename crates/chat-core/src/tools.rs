//! Tool-call requests and result envelopes.

use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Raw arguments attached to a tool call.
///
/// Models emit either a JSON-encoded string or an inline object; both
/// shapes must be accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawArguments {
    /// JSON-encoded argument string.
    Text(String),
    /// Inline argument object.
    Map(Map<String, Value>),
}

impl Default for RawArguments {
    fn default() -> Self {
        RawArguments::Map(Map::new())
    }
}

impl RawArguments {
    /// Decode into an argument map.
    ///
    /// String payloads are decoded strictly first; on failure a lenient
    /// pass normalizes single quotes to double quotes. If that also fails
    /// the arguments degrade to an empty map rather than an error, so a
    /// malformed payload never aborts the round.
    pub fn into_map(self) -> Map<String, Value> {
        match self {
            RawArguments::Map(map) => map,
            RawArguments::Text(text) => {
                if let Some(map) = decode_object(&text) {
                    return map;
                }
                let normalized = text.replace('\'', "\"");
                decode_object(&normalized).unwrap_or_default()
            }
        }
    }
}

fn decode_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// A tool invocation requested by the model, consumed within one round.
#[derive(Debug, Clone)]
pub struct ToolCallRequest {
    /// Opaque call id assigned by the model, if any.
    pub id: Option<String>,
    /// Requested tool name.
    pub name: String,
    /// Raw argument payload.
    pub arguments: RawArguments,
}

/// Normalized outcome of one tool dispatch.
///
/// Exactly one of `result`/`error` is populated, matching `ok`.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// Whether the dispatch succeeded.
    pub ok: bool,
    /// Result value on success.
    pub result: Option<Value>,
    /// Error description on failure.
    pub error: Option<String>,
}

impl ToolResult {
    /// Create a successful result.
    pub fn success(result: Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    /// Create a failed result.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error.into()),
        }
    }

    /// Encode the envelope as the JSON content of a tool-role message.
    pub fn to_json(&self) -> String {
        let body = if self.ok {
            json!({
                "ok": true,
                "result": self.result.clone().unwrap_or(Value::Null),
            })
        } else {
            json!({
                "ok": false,
                "error": self.error.clone().unwrap_or_default(),
            })
        };
        body.to_string()
    }
}

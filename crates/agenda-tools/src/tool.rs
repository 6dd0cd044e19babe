//! Tool trait definition and typed argument access.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::coerce::parse_datetime;
use crate::error::ToolError;
use crate::schema::ToolDeclaration;

/// Arguments passed to a tool for execution, already coerced against the
/// tool's declaration.
#[derive(Debug, Clone)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: Map<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: Map<String, Value>) -> Self {
        Self { params }
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            })
    }

    /// Get an optional string parameter.
    pub fn get_string_opt(&self, key: &str) -> Option<String> {
        self.params.get(key)?.as_str().map(|s| s.to_string())
    }

    /// Get an integer parameter, returning an error if missing or not an
    /// integer. Stringly-typed integers were already handled by coercion;
    /// anything still non-numeric here is a genuine domain error.
    pub fn get_i64(&self, key: &str) -> Result<i64, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_i64()
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected integer".to_string(),
            })
    }

    /// Get an optional integer parameter.
    pub fn get_i64_opt(&self, key: &str) -> Result<Option<i64>, ToolError> {
        match self.params.get(key) {
            Some(Value::Null) | None => Ok(None),
            Some(value) => {
                let n = value.as_i64().ok_or_else(|| ToolError::InvalidParameter {
                    name: key.to_string(),
                    reason: "expected integer".to_string(),
                })?;
                Ok(Some(n))
            }
        }
    }

    /// Get a datetime parameter, returning an error if missing or not
    /// parseable as ISO-8601.
    pub fn get_datetime(&self, key: &str) -> Result<NaiveDateTime, ToolError> {
        self.get_datetime_opt(key)?
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))
    }

    /// Get an optional datetime parameter.
    pub fn get_datetime_opt(&self, key: &str) -> Result<Option<NaiveDateTime>, ToolError> {
        match self.params.get(key) {
            Some(Value::Null) | None => Ok(None),
            Some(value) => {
                let text = value.as_str().ok_or_else(|| ToolError::InvalidParameter {
                    name: key.to_string(),
                    reason: "expected ISO 8601 datetime".to_string(),
                })?;
                let dt = parse_datetime(text).ok_or_else(|| ToolError::InvalidParameter {
                    name: key.to_string(),
                    reason: format!("not a valid ISO 8601 datetime: {}", text),
                })?;
                Ok(Some(dt))
            }
        }
    }
}

/// Trait for tools the model may request via a structured call.
///
/// A tool is a named, locally executable operation over the record store.
/// It returns a JSON value on success so results embed directly into the
/// tool-result envelope.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's declaration: name, description and parameter schema.
    fn declaration(&self) -> &'static ToolDeclaration;

    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &'static str {
        self.declaration().name
    }

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<Value, ToolError>;
}

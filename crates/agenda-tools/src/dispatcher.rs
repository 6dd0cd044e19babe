//! Tool dispatch: from a model-requested call to a normalized envelope.

use std::sync::Arc;

use chat_core::{ToolCallRequest, ToolResult};
use tracing::{debug, warn};

use crate::coerce::coerce_arguments;
use crate::registry::ToolRegistry;
use crate::tool::ToolArgs;

/// Dispatches one tool call: argument decoding, registry lookup, coercion,
/// execution and result normalization.
///
/// Every failure mode resolves to a `ToolResult` error envelope; nothing a
/// single call does can abort its siblings or the round. The dispatcher has
/// no transactional control over the record store: each call independently
/// commits or fails.
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    /// Create a dispatcher over a shared registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Dispatch one tool call.
    pub async fn dispatch(&self, call: &ToolCallRequest) -> ToolResult {
        let args = call.arguments.clone().into_map();

        let tool = match self.registry.get(&call.name) {
            Some(tool) => tool,
            None => {
                warn!("Unknown tool requested: {}", call.name);
                return ToolResult::error("tool not found");
            }
        };

        let coerced = coerce_arguments(tool.declaration(), args);
        debug!(
            "Dispatching tool '{}' with {} args",
            call.name,
            coerced.len()
        );

        match tool.execute(ToolArgs::new(coerced)).await {
            Ok(value) => ToolResult::success(value),
            Err(error) => {
                warn!("Tool '{}' failed: {}", call.name, error);
                ToolResult::error(error.to_string())
            }
        }
    }
}

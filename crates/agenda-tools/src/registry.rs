//! Tool registry: the fixed name-to-tool mapping shared by all requests.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::tool::Tool;

/// Registry for managing tools.
///
/// Holds the collection of tools advertised to the model and resolves
/// requested names to the corresponding operation. Lookup is a
/// case-sensitive exact match; an unknown name is a normal outcome the
/// caller must handle, not a failure. Tools are kept in name order so the
/// list advertised to the model is identical across processes.
pub struct ToolRegistry {
    /// Registered tools by name.
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool.
    ///
    /// If a tool with the same name already exists, it will be replaced.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        info!("Registering tool: {}", name);
        self.tools.insert(name, Arc::new(tool));
    }

    /// Resolve a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get a list of registered tool names.
    pub fn list_tools(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Wire-format declarations for every registered tool, advertised to
    /// the model on each round.
    pub fn declarations(&self) -> Vec<Value> {
        self.tools
            .values()
            .map(|tool| tool.declaration().to_wire())
            .collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

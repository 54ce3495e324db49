// ABOUTME: Implements ToolRegistry - registration-ordered tool dispatch
// ABOUTME: with soft failure conversion and source-trail aggregation.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{Source, Tool, ToolResult};
use crate::error::ToolError;
use crate::llm::ToolDefinition;

struct RegisteredTool {
    tool: Arc<dyn Tool>,
    // Trail of the tool's most recent execution, overwritten per dispatch.
    sources: RwLock<Vec<Source>>,
}

/// Registration-ordered registry of tools.
///
/// The source trail it aggregates is call-scoped state: use one registry
/// instance per in-flight query, not one shared across queries.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Duplicate names are rejected so dispatch is
    /// never ambiguous.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> Result<(), ToolError> {
        self.register_arc(Arc::new(tool))
    }

    /// Register a tool from an Arc.
    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        if self.tools.iter().any(|t| t.tool.name() == tool.name()) {
            return Err(ToolError::Duplicate(tool.name().to_string()));
        }
        self.tools.push(RegisteredTool {
            tool,
            sources: RwLock::new(Vec::new()),
        });
        Ok(())
    }

    /// The number of registered tools.
    pub fn count(&self) -> usize {
        self.tools.len()
    }

    /// Schema descriptors for all tools, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.tool.definition()).collect()
    }

    /// Execute a tool by name.
    ///
    /// Never fails at this boundary: an unknown name or a failing tool
    /// becomes a textual error result the model can react to.
    pub async fn execute(&self, name: &str, input: serde_json::Value) -> ToolResult {
        let Some(entry) = self.tools.iter().find(|t| t.tool.name() == name) else {
            warn!(tool = name, "dispatch to unregistered tool");
            return ToolResult::error(format!("Tool not found: {name}"));
        };

        debug!(tool = name, "executing tool");
        let result = match entry.tool.execute(input).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = name, error = %e, "tool execution failed");
                ToolResult::error(format!("Error executing tool {name}: {e}"))
            }
        };

        // Overwrite, never append: the trail always reflects the most
        // recent execution only.
        *entry.sources.write().await = result.sources.clone();
        result
    }

    /// The concatenated source trails of all tools, in registration order.
    pub async fn sources(&self) -> Vec<Source> {
        let mut all = Vec::new();
        for entry in &self.tools {
            all.extend(entry.sources.read().await.iter().cloned());
        }
        all
    }

    /// Reset every tool's source trail. Safe to call with no prior
    /// executions.
    pub async fn clear_sources(&self) {
        for entry in &self.tools {
            entry.sources.write().await.clear();
        }
    }
}

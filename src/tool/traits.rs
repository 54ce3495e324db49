// ABOUTME: Defines the Tool trait - the capability interface the completion
// ABOUTME: service invokes through the registry.

use async_trait::async_trait;

use super::ToolResult;
use crate::llm::ToolDefinition;

/// A tool the completion service may request to have executed.
///
/// Input decoding is the tool's own job: each implementation
/// deserializes its params struct from the raw payload, and a decode
/// failure surfaces as an `Err` that the registry folds into a soft
/// textual failure.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the model.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// The schema descriptor advertised to the completion service.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.schema(),
        }
    }

    /// Execute the tool with the given input payload.
    async fn execute(&self, input: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}

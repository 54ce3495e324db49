// ABOUTME: Defines all error types for the lectern library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under LecternError.

use crate::llm::StopReason;

/// Top-level error type for the lectern library.
#[derive(Debug, thiserror::Error)]
pub enum LecternError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from completion service operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A response that should have carried text did not. Carries the
    /// stop reason and the kinds of blocks that were present so the
    /// caller can tell what the model returned instead.
    #[error("no text content in response (stop reason: {stop_reason:?}, blocks: {block_kinds:?})")]
    NoTextContent {
        stop_reason: StopReason,
        block_kinds: Vec<String>,
    },
}

/// Errors from tool registration.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool already registered: {0}")]
    Duplicate(String),
}

/// Errors reported by a content store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),
}

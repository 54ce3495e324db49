// ABOUTME: Defines the LlmClient trait - the call surface the orchestration
// ABOUTME: loop depends on, implementable by any completion service adapter.

use async_trait::async_trait;

use super::{Request, Response};
use crate::error::LlmError;

/// Trait for completion service client implementations.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Create a message from the given conversation and parameters.
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError>;
}

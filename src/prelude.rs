// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use lectern::prelude::*;` to get started quickly.

pub use crate::config::Config;
pub use crate::error::{LecternError, LlmError, StoreError, ToolError};
pub use crate::generator::{DEFAULT_MAX_ROUNDS, FALLBACK_MESSAGE, Generator};
pub use crate::llm::{
    AnthropicClient, ContentBlock, LlmClient, Message, Request, Response, Role, StopReason,
    ToolChoice, ToolDefinition, Usage,
};
pub use crate::store::{
    ChunkMetadata, ContentStore, CourseOutline, LessonSummary, SearchHit,
};
pub use crate::tool::{Source, Tool, ToolRegistry, ToolResult};
pub use crate::tools::{CourseOutlineTool, CourseSearchTool};

// ABOUTME: Defines ToolResult and Source - tool execution outcomes carrying
// ABOUTME: formatted text, an error flag, and explicit attribution records.

use serde::Serialize;

/// An attribution record produced by a content search.
///
/// Links are kept as explicit `None` rather than dropped so consumers
/// always see the same shape (they serialize as `null`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    /// Display text, e.g. "Building Towards Computer Use - Lesson 5".
    pub text: String,

    /// Link to the course page, when indexed.
    pub course_link: Option<String>,

    /// Link to the specific lesson, when indexed.
    pub lesson_link: Option<String>,
}

impl Source {
    /// Create a source with no links.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            course_link: None,
            lesson_link: None,
        }
    }
}

/// Result of a tool execution.
///
/// The attribution trail is part of the return value rather than hidden
/// tool state, so the registry can aggregate it explicitly.
#[derive(Debug, Clone, Default)]
pub struct ToolResult {
    /// The output content fed back to the model.
    pub content: String,

    /// Whether this result represents an error.
    pub is_error: bool,

    /// Attribution records for the content, empty for non-search tools.
    pub sources: Vec<Source>,
}

impl ToolResult {
    /// Create a successful text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
            sources: Vec::new(),
        }
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: message.into(),
            is_error: true,
            sources: Vec::new(),
        }
    }

    /// Attach attribution records to the result.
    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }
}

// ABOUTME: CourseSearchTool - searches indexed course content with optional
// ABOUTME: course and lesson filters, recording attribution per chunk.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::store::ContentStore;
use crate::tool::{Source, Tool, ToolResult};

/// Tool for searching course content.
pub struct CourseSearchTool {
    store: Arc<dyn ContentStore>,
}

impl CourseSearchTool {
    /// Create a new search tool over the given store.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    fn empty_message(course_name: Option<&str>, lesson_number: Option<u32>) -> String {
        let mut msg = String::from("No relevant content found");
        if let Some(course) = course_name {
            msg.push_str(&format!(" for '{course}'"));
        }
        if let Some(lesson) = lesson_number {
            msg.push_str(&format!(" in lesson {lesson}"));
        }
        msg.push('.');
        msg
    }
}

#[async_trait]
impl Tool for CourseSearchTool {
    fn name(&self) -> &str {
        "search_course_content"
    }

    fn description(&self) -> &str {
        "Search course materials with smart course name matching and lesson filtering"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "What to search for in the course content"
                },
                "course_name": {
                    "type": "string",
                    "description": "Course title (partial matches allowed, e.g. 'MCP', 'Introduction')"
                },
                "lesson_number": {
                    "type": "integer",
                    "description": "Specific lesson number to search within (e.g. 1, 2, 3)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, input: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            query: String,
            course_name: Option<String>,
            lesson_number: Option<u32>,
        }

        let params: Params = serde_json::from_value(input)?;

        let hits = match self
            .store
            .search(
                &params.query,
                params.course_name.as_deref(),
                params.lesson_number,
            )
            .await
        {
            Ok(hits) => hits,
            // The store's error text goes back to the model verbatim.
            Err(e) => return Ok(ToolResult::error(e.to_string())),
        };

        if hits.is_empty() {
            return Ok(ToolResult::text(Self::empty_message(
                params.course_name.as_deref(),
                params.lesson_number,
            )));
        }

        // Store-defined relevance order is preserved, not re-sorted.
        let mut blocks = Vec::with_capacity(hits.len());
        let mut sources = Vec::with_capacity(hits.len());

        for hit in &hits {
            let course = &hit.metadata.course_title;
            let display = match hit.metadata.lesson_number {
                Some(n) => format!("{course} - Lesson {n}"),
                None => course.clone(),
            };
            blocks.push(format!("[{display}]\n{}", hit.content));

            let course_link = self.store.get_course_link(course).await;
            let lesson_link = match hit.metadata.lesson_number {
                Some(n) => self.store.get_lesson_link(course, n).await,
                None => None,
            };
            sources.push(Source {
                text: display,
                course_link,
                lesson_link,
            });
        }

        Ok(ToolResult::text(blocks.join("\n\n")).with_sources(sources))
    }
}

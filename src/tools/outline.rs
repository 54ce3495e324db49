// ABOUTME: CourseOutlineTool - returns a course's title, link, and ordered
// ABOUTME: lesson list. Structural lookup, produces no source trail.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::store::ContentStore;
use crate::tool::{Tool, ToolResult};

/// Tool for looking up course structure.
pub struct CourseOutlineTool {
    store: Arc<dyn ContentStore>,
}

impl CourseOutlineTool {
    /// Create a new outline tool over the given store.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for CourseOutlineTool {
    fn name(&self) -> &str {
        "get_course_outline"
    }

    fn description(&self) -> &str {
        "Get a course's outline: its title, link, and the full list of lesson numbers and titles"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "course_name": {
                    "type": "string",
                    "description": "Course title (partial matches allowed)"
                }
            },
            "required": ["course_name"]
        })
    }

    async fn execute(&self, input: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            course_name: String,
        }

        let params: Params = serde_json::from_value(input)?;

        let Some(outline) = self.store.get_course_outline(&params.course_name).await else {
            return Ok(ToolResult::text(format!(
                "No course found matching '{}'",
                params.course_name
            )));
        };

        let mut out = format!("Course: {}\n", outline.course_title);
        match &outline.course_link {
            Some(link) => out.push_str(&format!("Course link: {link}\n")),
            None => out.push_str("Course link: not available\n"),
        }
        out.push_str(&format!("Lessons ({}):\n", outline.lessons.len()));
        for lesson in &outline.lessons {
            out.push_str(&format!("{}. {}\n", lesson.lesson_number, lesson.lesson_title));
        }

        Ok(ToolResult::text(out.trim_end().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::{CourseOutline, LessonSummary, SearchHit};

    struct OutlineStore {
        outline: Option<CourseOutline>,
    }

    #[async_trait]
    impl ContentStore for OutlineStore {
        async fn search(
            &self,
            _query: &str,
            _course_name: Option<&str>,
            _lesson_number: Option<u32>,
        ) -> Result<Vec<SearchHit>, StoreError> {
            Ok(Vec::new())
        }

        async fn get_course_link(&self, _course_title: &str) -> Option<String> {
            None
        }

        async fn get_lesson_link(
            &self,
            _course_title: &str,
            _lesson_number: u32,
        ) -> Option<String> {
            None
        }

        async fn get_course_outline(&self, _course_title: &str) -> Option<CourseOutline> {
            self.outline.clone()
        }
    }

    fn sample_outline() -> CourseOutline {
        CourseOutline {
            course_title: "Building Towards Computer Use".into(),
            course_link: Some("https://example.com/course/123".into()),
            lessons: vec![
                LessonSummary {
                    lesson_number: 1,
                    lesson_title: "Introduction".into(),
                },
                LessonSummary {
                    lesson_number: 2,
                    lesson_title: "Getting Started".into(),
                },
                LessonSummary {
                    lesson_number: 3,
                    lesson_title: "Computer Use Basics".into(),
                },
            ],
        }
    }

    #[test]
    fn test_outline_formatting() {
        let tool = CourseOutlineTool::new(Arc::new(OutlineStore {
            outline: Some(sample_outline()),
        }));

        let result = tokio_test::block_on(
            tool.execute(serde_json::json!({"course_name": "computer use"})),
        )
        .unwrap();

        assert!(!result.is_error);
        assert!(result.content.contains("Course: Building Towards Computer Use"));
        assert!(result.content.contains("https://example.com/course/123"));
        assert!(result.content.contains("Lessons (3):"));
        assert!(result.content.contains("1. Introduction"));
        assert!(result.content.contains("3. Computer Use Basics"));
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_missing_link_is_named() {
        let mut outline = sample_outline();
        outline.course_link = None;
        let tool = CourseOutlineTool::new(Arc::new(OutlineStore {
            outline: Some(outline),
        }));

        let result = tokio_test::block_on(
            tool.execute(serde_json::json!({"course_name": "computer use"})),
        )
        .unwrap();

        assert!(result.content.contains("Course link: not available"));
    }

    #[test]
    fn test_unknown_course() {
        let tool = CourseOutlineTool::new(Arc::new(OutlineStore { outline: None }));

        let result = tokio_test::block_on(
            tool.execute(serde_json::json!({"course_name": "Underwater Basket Weaving"})),
        )
        .unwrap();

        assert!(!result.is_error);
        assert_eq!(
            result.content,
            "No course found matching 'Underwater Basket Weaving'"
        );
    }

    #[test]
    fn test_missing_course_name_is_an_error() {
        let tool = CourseOutlineTool::new(Arc::new(OutlineStore { outline: None }));
        let err = tokio_test::block_on(tool.execute(serde_json::json!({})));
        assert!(err.is_err());
    }
}

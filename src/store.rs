// ABOUTME: Defines the ContentStore trait - the indexed course content
// ABOUTME: capability that tools search and resolve links against.

use async_trait::async_trait;

use crate::error::StoreError;

/// Metadata attached to an indexed content chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkMetadata {
    /// Title of the course the chunk belongs to.
    pub course_title: String,

    /// Lesson the chunk came from, when known.
    pub lesson_number: Option<u32>,
}

/// One ranked search result from the store.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// The document chunk text.
    pub content: String,

    /// Course and lesson attribution for the chunk.
    pub metadata: ChunkMetadata,

    /// Similarity distance, smaller is closer.
    pub distance: f32,
}

/// A lesson entry in a course outline.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonSummary {
    pub lesson_number: u32,
    pub lesson_title: String,
}

/// Structure of a course: title, link, and its ordered lessons.
#[derive(Debug, Clone)]
pub struct CourseOutline {
    pub course_title: String,
    pub course_link: Option<String>,
    pub lessons: Vec<LessonSummary>,
}

/// Keyed similarity-search capability over indexed course content.
///
/// Implementations own course-name resolution (fuzzy/partial matching)
/// and ranking. An empty hit list is a valid outcome distinct from an
/// error.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Search course content, optionally filtered by course and lesson.
    /// Hits come back in store-defined relevance order.
    async fn search(
        &self,
        query: &str,
        course_name: Option<&str>,
        lesson_number: Option<u32>,
    ) -> Result<Vec<SearchHit>, StoreError>;

    /// Resolve the link for a course, if one is indexed.
    async fn get_course_link(&self, course_title: &str) -> Option<String>;

    /// Resolve the link for a specific lesson, if one is indexed.
    async fn get_lesson_link(&self, course_title: &str, lesson_number: u32) -> Option<String>;

    /// Look up the outline for a named course.
    async fn get_course_outline(&self, course_title: &str) -> Option<CourseOutline>;
}

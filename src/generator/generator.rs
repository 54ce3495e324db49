// ABOUTME: Generator - drives the bounded multi-round tool orchestration
// ABOUTME: loop against a completion service and a tool registry.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;
use crate::llm::{
    AnthropicClient, ContentBlock, LlmClient, Message, Request, Response, StopReason, ToolChoice,
};
use crate::tool::ToolRegistry;

/// Default number of tool rounds per query.
pub const DEFAULT_MAX_ROUNDS: usize = 2;

/// Returned when the round budget ran out and the forced synthesis call
/// still produced no text. The one designed degradation path; it never
/// claims success.
pub const FALLBACK_MESSAGE: &str = "I've searched through the course materials but need more \
    tool calls to fully answer your question. Please try asking a more specific question, \
    or break your question into smaller parts.";

const SYSTEM_PROMPT: &str = "\
You are an AI assistant specialized in course materials and educational content, \
with tools for searching and outlining courses.

Tool usage:
- get_course_outline: for questions about course structure, syllabus, or lesson lists. \
Returns the course title, course link, and every lesson's number and title.
- search_course_content: for questions about specific course content or detailed \
educational materials. Returns relevant content chunks with context.
- You may call tools across sequential rounds: use a later round to refine or extend \
earlier results, e.g. for comparisons or multi-part questions.
- Synthesize tool results into accurate, fact-based responses.
- If a tool yields no results, state this clearly without offering alternatives.

Response protocol:
- General knowledge questions: answer from existing knowledge without tools.
- Course outline questions: use get_course_outline, then present the course title, \
course link, and all lessons.
- Course content questions: use search_course_content, then answer.
- No meta-commentary: provide direct answers only, with no reasoning process, tool \
explanations, or mentions of searching.

All responses must be brief, educational, clear, and example-supported when examples \
aid understanding. Provide only the direct answer to what was asked.";

/// Drives a conversation with the completion service through bounded
/// tool-use rounds and returns the final answer text.
///
/// The generator neither reads nor clears the registry's source trail;
/// that is the caller's job after `generate` returns.
pub struct Generator {
    client: Arc<dyn LlmClient>,
    model: String,
    max_tokens: u32,
}

impl Generator {
    /// Create a generator over the given client and model.
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            max_tokens: Config::DEFAULT_MAX_TOKENS,
        }
    }

    /// Build a generator backed by an Anthropic client from a config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: Arc::new(AnthropicClient::new(config.api_key.clone())),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Override the output token cap.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Answer a query, running up to `max_rounds` tool rounds.
    ///
    /// Makes at most `max_rounds + 1` completion service calls: one per
    /// round, plus the forced text-only synthesis when the budget is
    /// spent before the model commits to an answer.
    pub async fn generate(
        &self,
        query: &str,
        history: Option<&str>,
        tools: Option<&ToolRegistry>,
        max_rounds: usize,
    ) -> Result<String, LlmError> {
        let system = Self::build_system(history);
        let mut messages = vec![Message::user(query)];

        for round in 1..=max_rounds {
            let mut request = self.base_request(&messages, &system);
            if let Some(registry) = tools {
                request = request
                    .tools(registry.definitions())
                    .tool_choice(ToolChoice::Auto);
            }

            let response = self.client.create_message(&request).await?;

            if let (StopReason::ToolUse, Some(registry)) = (response.stop_reason, tools) {
                debug!(round, "model requested tool use");

                // The raw response content becomes the assistant turn, so
                // the tool_use ids stay paired with the results below.
                messages.push(Message::assistant(response.content.clone()));

                let mut results = Vec::new();
                for block in &response.content {
                    if let ContentBlock::ToolUse { id, name, input } = block {
                        let result = registry.execute(name, input.clone()).await;
                        results.push(if result.is_error {
                            ContentBlock::tool_error(id, &result.content)
                        } else {
                            ContentBlock::tool_result(id, &result.content)
                        });
                    }
                }
                if !results.is_empty() {
                    messages.push(Message::tool_results(results));
                }
                continue;
            }

            // Terminal stop: return the answer without consuming the
            // remaining budget.
            return Self::extract_text(&response);
        }

        self.final_synthesis(messages, &system).await
    }

    fn base_request(&self, messages: &[Message], system: &str) -> Request {
        Request::new(&self.model)
            .messages(messages.to_vec())
            .system(system)
            .max_tokens(self.max_tokens)
            .temperature(0.0)
    }

    fn build_system(history: Option<&str>) -> String {
        match history {
            Some(history) => format!("{SYSTEM_PROMPT}\n\nPrevious conversation:\n{history}"),
            None => SYSTEM_PROMPT.to_string(),
        }
    }

    /// One additional call with tools withheld, forcing a text answer
    /// out of the accumulated conversation.
    async fn final_synthesis(
        &self,
        messages: Vec<Message>,
        system: &str,
    ) -> Result<String, LlmError> {
        debug!("round budget exhausted, forcing text-only synthesis");
        let request = self.base_request(&messages, system);
        let response = self.client.create_message(&request).await?;

        match Self::extract_text(&response) {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(error = %e, "final synthesis produced no text, degrading to fallback");
                Ok(FALLBACK_MESSAGE.to_string())
            }
        }
    }

    fn extract_text(response: &Response) -> Result<String, LlmError> {
        match response.first_text() {
            Some(text) => Ok(text.to_string()),
            None => Err(LlmError::NoTextContent {
                stop_reason: response.stop_reason,
                block_kinds: response.block_kinds(),
            }),
        }
    }
}

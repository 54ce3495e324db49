// ABOUTME: LLM module - completion service abstraction and types.
// ABOUTME: Defines the client trait and the Anthropic adapter.

mod anthropic;
mod client;
mod types;

pub use anthropic::*;
pub use client::*;
pub use types::*;

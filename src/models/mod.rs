//! Data models for the relay API and the Chat Completions wire format.
//!
//! This module groups two submodules:
//! - `api`: Types for the simplified inbound schema clients speak to the relay.
//! - `completion`: Types for the single-turn subset of the OpenAI Chat
//!   Completions request the relay sends upstream.
//!
//! The mapping logic that converts `api::ChatRequest` to
//! `completion::CompletionRequest` is implemented in `crate::translate`.

pub mod api;
pub mod completion;

// Convenience re-exports for downstream users.
pub use api::{ChatRequest, ChatResponse, ContentItem, ImageUrl};
pub use completion::{CompletionMessage, CompletionRequest, ContentPart, ImageUrlPart};

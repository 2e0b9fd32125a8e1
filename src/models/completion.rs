use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Image reference in the Chat Completions wire shape:
/// `{"type":"image_url","image_url":{"url":...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrlPart {
    pub url: String,
}

/// One content part of a Chat Completions message.
///
/// Serializes to `{type:"text", text}` or `{type:"image_url", image_url:{url}}`
/// to match the multimodal content-array form of the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrlPart },
}

/// A single role-tagged message with an ordered content array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

/// Chat Completions request body (the single-turn subset the relay sends).
///
/// Decode knobs are optional and omitted from the wire when unset.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

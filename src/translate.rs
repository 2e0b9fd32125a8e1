use crate::config::RelayConfig;
use crate::models::api::{ChatRequest, ContentItem};
use crate::models::completion::{CompletionMessage, CompletionRequest, ContentPart, ImageUrlPart};

/// Translate an inbound relay request into a single-turn Chat Completions
/// request body. Pure function, no I/O.
///
/// Mapping highlights:
/// - items: forwarded 1:1, in order, as the content parts of one "user" message.
/// - text items: an absent text value is coerced to the empty string.
/// - image items: the URL is forwarded verbatim (http(s) URL or data URI).
/// - model and the optional decode knobs come from configuration.
pub fn to_completion_request(src: &ChatRequest, cfg: &RelayConfig) -> CompletionRequest {
    let content = src.items.iter().map(to_content_part).collect();

    CompletionRequest {
        model: cfg.model.clone(),
        messages: vec![CompletionMessage {
            role: "user".to_string(),
            content,
        }],
        temperature: cfg.temperature,
        max_tokens: cfg.max_tokens,
    }
}

fn to_content_part(item: &ContentItem) -> ContentPart {
    match item {
        ContentItem::Text { text } => ContentPart::Text {
            text: text.clone().unwrap_or_default(),
        },
        ContentItem::ImageUrl { image_url } => ContentPart::ImageUrl {
            image_url: ImageUrlPart {
                url: image_url.url.clone(),
            },
        },
    }
}

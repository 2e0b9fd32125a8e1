use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// Image reference carried by an `image_url` content item.
///
/// The URL may be an http(s) address or a data URI; it is forwarded upstream
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// One ordered part of the inbound user turn.
///
/// Internally tagged on `type`, so an unknown discriminator or an image item
/// missing its `image_url` object is rejected at deserialization time rather
/// than surfacing later as an ignored optional field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Text {
        /// Absent text is tolerated and coerced to "" during translation.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    ImageUrl { image_url: ImageUrl },
}

/// Inbound relay request: an ordered sequence of content items forming a
/// single user turn. Order is semantic; the sequence may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub items: Vec<ContentItem>,
}

impl ChatRequest {
    /// Reject image items carrying an empty URL.
    ///
    /// Runs before translation, so a failing request never reaches the
    /// upstream. Shape-level problems (unknown `type`, missing `image_url`
    /// object) are already caught by typed deserialization.
    pub fn validate(&self) -> Result<(), RelayError> {
        for (idx, item) in self.items.iter().enumerate() {
            if let ContentItem::ImageUrl { image_url } = item {
                if image_url.url.trim().is_empty() {
                    return Err(RelayError::InvalidRequest(format!(
                        "items[{idx}]: image_url.url must be a non-empty string"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Outbound relay response: the extracted reply text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

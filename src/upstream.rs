use serde_json::Value;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::models::completion::CompletionRequest;

/// POST the translated payload to `{base_url}/chat/completions` and pull the
/// reply text out of the response.
///
/// One attempt only: a transport failure, a non-success status, and an
/// unparseable body all surface immediately as `RelayError::Upstream`. The
/// overall timeout lives on the client (see `util::build_http_client`).
pub async fn call_chat_completions(
    http: &reqwest::Client,
    cfg: &RelayConfig,
    payload: &CompletionRequest,
) -> Result<String, RelayError> {
    let url = format!("{}/chat/completions", cfg.base_url.trim_end_matches('/'));

    let resp = http
        .post(&url)
        .bearer_auth(&cfg.api_key)
        .json(payload)
        .send()
        .await
        .map_err(|e| RelayError::Upstream(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| RelayError::Upstream(e.to_string()))?;

    if !status.is_success() {
        tracing::warn!(%status, "upstream returned error status");
        return Err(RelayError::Upstream(body));
    }

    let json: Value = serde_json::from_str(&body)
        .map_err(|e| RelayError::Upstream(format!("invalid JSON from upstream: {e}")))?;
    extract_reply(&json)
}

/// Read `choices[0].message.content` from a parsed upstream body.
///
/// A missing or non-string field anywhere along that path is the shape-error
/// condition: the call succeeded transport-wise but the payload was not a
/// chat completion.
pub fn extract_reply(v: &Value) -> Result<String, RelayError> {
    v.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(RelayError::UnexpectedResponse)
}

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::RelayError;
use crate::models::api::{ChatRequest, ChatResponse};
use crate::translate::to_completion_request;
use crate::upstream::call_chat_completions;
use crate::util::{cors_layer_from_env, AppState};

/// Build the axum router with `/`, `/status` and `/chat`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/status", get(status))
        .route("/chat", post(chat))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer_from_env())
}

/// Liveness probe. Never touches the upstream.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Service status endpoint exposing version, configured model, and routes.
async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "chatrelay",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.config.model,
        "routes": ["/", "/status", "/chat"]
    }))
}

/// Relay one multimodal request: validate, translate, call the upstream,
/// extract the reply. Each stage short-circuits the rest on failure.
///
/// Shape-level validation (unknown item `type`, missing `image_url` object)
/// happens in the typed `Json` extractor and is rejected before this handler
/// runs.
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, RelayError> {
    req.validate()?;
    let payload = to_completion_request(&req, &state.config);
    let reply = call_chat_completions(&state.http, &state.config, &payload).await?;
    Ok(Json(ChatResponse { reply }))
}

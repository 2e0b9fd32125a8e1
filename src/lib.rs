#![forbid(unsafe_code)]
#![doc = r#"
Chatrelay

Relay multimodal chat requests (ordered text and image items) to an
OpenAI-compatible Chat Completions endpoint and return the generated text.

Crate highlights
- Library: pure translation via `to_completion_request(&ChatRequest, &RelayConfig)`.
- HTTP server (in `server`): `POST /chat` plus `/` and `/status` probes.
- One outbound call per inbound request; no retries, no streaming, no state.

Modules
- `models`: Data structures for the inbound API and the Completions wire shape.
- `translate`: Mapping logic from relay items to Chat Completions content parts.
- `upstream`: The single outbound call and reply extraction.
- `server`: Axum router/handlers (the binary uses this).
- `config`: Startup-time upstream configuration.
- `util`: Shared helpers (tracing, env, CORS, error bodies).
"#]

pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod translate;
pub mod upstream;
pub mod util;

// Re-export the primary translation function for ergonomic library use.
pub use crate::translate::to_completion_request;

pub use crate::error::RelayError;

// Re-export model namespaces for convenience (downstream users can do `use chatrelay::api`).
pub use crate::models::{api, completion};

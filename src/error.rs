use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::util::error_response;

/// Error taxonomy for the relay pipeline.
///
/// Every variant is terminal for its request: nothing is retried and each
/// failure maps to exactly one client-visible HTTP error.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Inbound body failed validation; reported before any upstream call.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The outbound call failed at the transport level, returned a
    /// non-success status, or produced an unparseable body. Carries the
    /// upstream's error text for diagnostics.
    #[error("model server error: {0}")]
    Upstream(String),

    /// Upstream returned a success status but the body lacked
    /// `choices[0].message.content`. The raw body is deliberately not echoed.
    #[error("unexpected model response")]
    UnexpectedResponse,
}

impl RelayError {
    /// HTTP status the error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) | RelayError::UnexpectedResponse => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        error_response(self.status(), &self.to_string())
    }
}

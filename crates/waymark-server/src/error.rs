//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use waymark_nav::NavError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No redirect rule for the requested path.
    #[error("No redirect for path: {0}")]
    NoRedirect(String),

    /// The `[analytics]` section is not configured.
    #[error("Analytics is not configured")]
    AnalyticsDisabled,

    /// Navigation registry error.
    #[error(transparent)]
    Navigation(#[from] NavError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NoRedirect(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "No redirect", "path": path}),
            ),
            Self::AnalyticsDisabled => (
                StatusCode::NOT_FOUND,
                json!({"error": "Analytics is not configured"}),
            ),
            Self::Navigation(NavError::UnknownMount(mount)) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Unknown mount path", "mount": mount}),
            ),
            Self::Navigation(e) => {
                tracing::error!(error = %e, "Navigation request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
            Self::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

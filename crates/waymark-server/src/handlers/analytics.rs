//! Analytics snippet endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use waymark_analytics::render_snippet;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /analytics.js.
pub(crate) async fn get_snippet(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let config = state
        .analytics
        .as_ref()
        .ok_or(ServerError::AnalyticsDisabled)?;
    Ok((
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        render_snippet(config),
    ))
}

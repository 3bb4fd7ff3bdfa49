//! Redirect lookup and mount-root redirects.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::Redirect;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Query for GET /api/redirect.
#[derive(Deserialize)]
pub(crate) struct RedirectQuery {
    /// Requested path (e.g., "/docs/").
    path: String,
}

/// Response for GET /api/redirect.
#[derive(Serialize)]
pub(crate) struct RedirectResponse {
    from: String,
    to: String,
}

/// Handle GET /api/redirect?path=/docs/.
pub(crate) async fn get_redirect(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RedirectQuery>,
) -> Result<Json<RedirectResponse>, ServerError> {
    let to = state
        .redirects
        .resolve(&query.path)
        .ok_or_else(|| ServerError::NoRedirect(query.path.clone()))?;
    Ok(Json(RedirectResponse {
        to: to.to_owned(),
        from: query.path,
    }))
}

/// Fallback for every other route: 308 when the path is a redirect source.
pub(crate) async fn redirect_fallback(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Redirect, ServerError> {
    let path = uri.path();
    match state.redirects.resolve(path) {
        Some(to) => {
            tracing::debug!(from = path, to, "Redirecting");
            Ok(Redirect::permanent(to))
        }
        None => Err(ServerError::NoRedirect(path.to_owned())),
    }
}

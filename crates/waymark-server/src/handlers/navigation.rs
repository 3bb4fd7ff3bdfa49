//! Navigation API endpoint.
//!
//! Returns the resolved sidebar of one mount.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use waymark_nav::Sidebar;

use crate::error::ServerError;
use crate::state::AppState;

/// Query for GET /api/navigation.
#[derive(Deserialize)]
pub(crate) struct NavigationQuery {
    /// Mount path (e.g., "/docs/").
    mount: String,
}

/// Handle GET /api/navigation?mount=/docs/.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<Sidebar>, ServerError> {
    let sidebar = state.registry.sidebar(&query.mount, state.pages.as_ref())?;
    Ok(Json(sidebar))
}

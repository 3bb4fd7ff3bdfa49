//! Configuration API endpoint.
//!
//! Returns site metadata and the registered mounts for the frontend.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use waymark_config::SiteConfig;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    /// Site metadata, unchanged.
    site: SiteConfig,
    /// Mount paths in registration order.
    mounts: Vec<String>,
    /// Whether `/analytics.js` is served.
    analytics_enabled: bool,
    /// Server version.
    version: String,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        site: state.site.clone(),
        mounts: state.registry.mounts().map(str::to_owned).collect(),
        analytics_enabled: state.analytics.is_some(),
        version: state.version.clone(),
    })
}

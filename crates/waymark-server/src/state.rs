//! Application state.
//!
//! Shared, read-only state for all request handlers.

use std::sync::Arc;

use waymark_analytics::AnalyticsConfig;
use waymark_config::SiteConfig;
use waymark_nav::{NavigationRegistry, RedirectTable};
use waymark_pages::PageIndex;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Navigation trees by mount path.
    pub(crate) registry: NavigationRegistry,
    /// Mount-root redirects.
    pub(crate) redirects: RedirectTable,
    /// Page index for derived titles.
    pub(crate) pages: Arc<dyn PageIndex>,
    /// Site metadata passed through to the frontend.
    pub(crate) site: SiteConfig,
    /// Analytics snippet configuration, if enabled.
    pub(crate) analytics: Option<AnalyticsConfig>,
    /// Application version.
    pub(crate) version: String,
}

//! HTTP server for Waymark.
//!
//! Serves navigation data to browser-side collaborators:
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /api/config` | site metadata and mounts |
//! | `GET /api/navigation?mount=/docs/` | resolved sidebar |
//! | `GET /api/redirect?path=/docs/` | redirect target |
//! | `GET /analytics.js` | analytics snippet |
//! | any other path | `308` if it is a redirect source, else `404` |
//!
//! # Quick Start
//!
//! ```ignore
//! use waymark_config::Config;
//! use waymark_server::{run_server, server_config_from_config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load(None, None).unwrap();
//!     let server_config = server_config_from_config(&config, "0.1.0".to_owned());
//!     run_server(server_config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use waymark_analytics::AnalyticsConfig;
use waymark_config::SiteConfig;
use waymark_nav::{NavigationRegistry, NavigationTree, RedirectRule, RedirectTable};
use waymark_pages::FsPageIndex;

pub use error::ServerError;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Markdown source root for derived titles.
    pub source_dir: PathBuf,
    /// Site metadata.
    pub site: SiteConfig,
    /// Navigation trees.
    pub trees: Vec<NavigationTree>,
    /// Mount-root redirects.
    pub redirects: Vec<RedirectRule>,
    /// Analytics snippet configuration.
    pub analytics: Option<AnalyticsConfig>,
    /// Application version.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            source_dir: PathBuf::from("docs"),
            site: SiteConfig::default(),
            trees: Vec::new(),
            redirects: Vec::new(),
            analytics: None,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the trees or redirects cannot be indexed, or if the
/// host does not resolve or the server fails to bind.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState {
        registry: NavigationRegistry::new(config.trees)?,
        redirects: RedirectTable::new(config.redirects)?,
        pages: Arc::new(FsPageIndex::new(config.source_dir)),
        site: config.site,
        analytics: config.analytics,
        version: config.version,
    });

    let app = app::create_router(state);

    let listener = bind(&config.host, config.port).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Bind a listener, resolving host names such as `localhost` and bare IPv6
/// addresses.
async fn bind(host: &str, port: u16) -> Result<tokio::net::TcpListener, ServerError> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(host, port, address = ?listener.local_addr().ok(), "Starting server");
    Ok(listener)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Waymark config.
#[must_use]
pub fn server_config_from_config(config: &waymark_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        site: config.site.clone(),
        trees: config.trees.clone(),
        redirects: config.redirects.clone(),
        analytics: config.analytics.clone(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_config_from_config() {
        let config: waymark_config::Config = toml::from_str(
            r#"
[server]
port = 9000

[[trees]]
mount = "/docs/"

[analytics]
script_src = "/stats.js"
"#,
        )
        .unwrap();

        let server = server_config_from_config(&config, "1.2.3".to_owned());

        assert_eq!(server.port, 9000);
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.trees.len(), 1);
        assert_eq!(server.version, "1.2.3");
        assert!(server.analytics.is_some());
    }

    #[tokio::test]
    async fn test_bind_resolves_host_names() {
        let listener = bind("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());

        let listener = bind("127.0.0.1", 0).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_unknown_host_fails() {
        let err = bind("no-such-host.invalid", 0).await.unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }
}

//! Configuration management for Waymark.
//!
//! Parses `waymark.toml` with serde and discovers it in the current directory
//! or its parents. CLI settings are applied during load via [`CliSettings`].
//!
//! ```toml
//! [site]
//! title = "GraphQL by PoP"
//!
//! [[trees]]
//! mount = "/docs/"
//!
//! [[trees.sections]]
//! title = "Getting Started"
//! children = ["getting-started/intro", ["getting-started/configuration", "Config"]]
//!
//! [[trees]]
//! mount = "/tutorials/"
//! sections = ["cms-agnostic-resolver", "localized-newsletter"]
//!
//! [[redirects]]
//! from = "/docs/"
//! to = "/docs/getting-started/intro"
//!
//! [analytics]
//! script_src = "https://stats.example.com/a.js"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `${VAR}` (error if unset) and `${VAR:-default}` are expanded in:
//! - `server.host`
//! - `analytics.script_src`

mod expand;
mod site;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use waymark_analytics::AnalyticsConfig;
use waymark_nav::{NavError, NavigationRegistry, NavigationTree, RedirectRule, RedirectTable};

pub use site::{HeadTag, SiteConfig};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "waymark.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Docs configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Site metadata passed through to the renderer.
    pub site: SiteConfig,
    /// Navigation trees, one per mount path.
    pub trees: Vec<NavigationTree>,
    /// Mount-root redirects.
    pub redirects: Vec<RedirectRule>,
    /// Analytics snippet configuration (optional section).
    pub analytics: Option<AnalyticsConfig>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Markdown source root; each mount is a subdirectory.
    pub source_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Navigation trees or redirects cannot be indexed.
    #[error("Configuration error: {0}")]
    Navigation(#[from] NavError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`WAYMARK_HOST`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `waymark.toml` in the current directory and its parents, falling
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if
    /// reading, parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Build the navigation registry from `[[trees]]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Navigation` if two trees share a mount path.
    pub fn navigation_registry(&self) -> Result<NavigationRegistry, ConfigError> {
        Ok(NavigationRegistry::new(self.trees.iter().cloned())?)
    }

    /// Build the redirect table from `[[redirects]]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Navigation` if two rules share a source path.
    pub fn redirect_table(&self) -> Result<RedirectTable, ConfigError> {
        Ok(RedirectTable::new(self.redirects.iter().cloned())?)
    }

    /// Validated analytics configuration, if the section is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is invalid.
    pub fn analytics(&self) -> Result<Option<&AnalyticsConfig>, ConfigError> {
        let Some(analytics) = &self.analytics else {
            return Ok(None);
        };
        analytics
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(Some(analytics))
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            docs: DocsConfigRaw::default(),
            site: SiteConfig::default(),
            trees: Vec::new(),
            redirects: Vec::new(),
            analytics: None,
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            trees = config.trees.len(),
            redirects = config.redirects.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Structural problems inside navigation trees are not checked here; they
    /// are advisory and reported by `waymark_nav::check_site`.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".to_owned()));
        }

        self.navigation_registry()?;
        self.redirect_table()?;
        self.analytics()?;
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref mut analytics) = self.analytics {
            analytics.script_src =
                expand::expand_env(&analytics.script_src, "analytics.script_src")?;
        }

        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };
    }
}

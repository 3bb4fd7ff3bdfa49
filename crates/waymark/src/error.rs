//! CLI error types.

use waymark_config::ConfigError;
use waymark_nav::NavError;
use waymark_server::ServerError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Navigation(#[from] NavError),

    #[error("{0}")]
    Server(#[from] ServerError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Site check failed with {0} error(s)")]
    CheckFailed(usize),

    #[error("No redirect for {0}")]
    NoRedirect(String),

    #[error("{0}")]
    Validation(String),
}

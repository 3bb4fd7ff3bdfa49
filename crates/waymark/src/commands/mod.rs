//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;
pub(crate) mod resolve;
pub(crate) mod serve;
pub(crate) mod snippet;

use std::path::PathBuf;

use clap::Args;
use waymark_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use snippet::SnippetArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover waymark.toml).
    #[arg(short, long, env = "WAYMARK_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration, applying `settings` on top.
    pub(crate) fn load(&self, settings: Option<&CliSettings>) -> Result<Config, CliError> {
        Ok(Config::load(self.config.as_deref(), settings)?)
    }
}
